//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}

/// First entity in `items` carrying `id`.
pub fn find_by_id<'a, E>(items: impl IntoIterator<Item = &'a E>, id: E::Id) -> Option<&'a E>
where
    E: Entity + 'a,
{
    items.into_iter().find(|item| item.id() == id)
}

/// Index of the first entity in `items` carrying `id`.
pub fn position_by_id<E: Entity>(items: &[E], id: E::Id) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Shelf {
        id: u32,
        label: &'static str,
    }

    impl Entity for Shelf {
        type Id = u32;

        fn id(&self) -> u32 {
            self.id
        }
    }

    fn shelves() -> Vec<Shelf> {
        vec![
            Shelf { id: 4, label: "north" },
            Shelf { id: 9, label: "south" },
            Shelf { id: 4, label: "duplicate" },
        ]
    }

    #[test]
    fn finds_first_match_by_id() {
        let shelves = shelves();
        assert_eq!(find_by_id(&shelves, 4).map(|s| s.label), Some("north"));
        assert_eq!(find_by_id(&shelves, 1), None);
    }

    #[test]
    fn positions_follow_slice_order() {
        let shelves = shelves();
        assert_eq!(position_by_id(&shelves, 9), Some(1));
        assert_eq!(position_by_id(&shelves, 4), Some(0));
        assert_eq!(position_by_id::<Shelf>(&[], 4), None);
    }
}
