//! Staff roles and per-role storage.
//!
//! ## Role
//!
//! The three classroom staff slots a card can be placed into. Each role
//! holds at most one card per turn, and placed cards resolve in
//! `Role::ALL` order.
//!
//! ## RoleMap
//!
//! Fixed-size per-role storage backed by an array for O(1) access.
//! Supports iteration and indexing by `Role`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A staff slot a card can be assigned to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    /// 室長
    Leader,
    /// 講師
    Teacher,
    /// 事務
    Staff,
}

impl Role {
    /// All roles, in resolution order.
    pub const ALL: [Role; 3] = [Role::Leader, Role::Teacher, Role::Staff];

    /// Slot index (0-based, resolution order).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Role::Leader => 0,
            Role::Teacher => 1,
            Role::Staff => 2,
        }
    }

    /// The token card text uses for this role.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Role::Leader => "室長",
            Role::Teacher => "講師",
            Role::Staff => "事務",
        }
    }

    /// Map a card-text token to a role.
    ///
    /// ```
    /// use juku_deck::core::Role;
    ///
    /// assert_eq!(Role::from_label("講師"), Some(Role::Teacher));
    /// assert_eq!(Role::from_label("校長"), None);
    /// ```
    #[must_use]
    pub fn from_label(token: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.label() == token)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-role data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use juku_deck::core::{Role, RoleMap};
///
/// let mut slots: RoleMap<Option<u32>> = RoleMap::default();
/// slots[Role::Teacher] = Some(7);
///
/// assert_eq!(slots[Role::Leader], None);
/// assert_eq!(slots[Role::Teacher], Some(7));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleMap<T> {
    data: [T; 3],
}

impl<T> RoleMap<T> {
    /// Create a RoleMap with values from a factory function.
    pub fn new(factory: impl Fn(Role) -> T) -> Self {
        Self {
            data: Role::ALL.map(factory),
        }
    }

    /// Get a reference to a role's data.
    #[must_use]
    pub fn get(&self, role: Role) -> &T {
        &self.data[role.index()]
    }

    /// Get a mutable reference to a role's data.
    pub fn get_mut(&mut self, role: Role) -> &mut T {
        &mut self.data[role.index()]
    }

    /// Iterate over (Role, &T) pairs in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &T)> {
        Role::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Role, &mut T) pairs in resolution order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Role, &mut T)> {
        Role::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<Role> for RoleMap<T> {
    type Output = T;

    fn index(&self, role: Role) -> &Self::Output {
        self.get(role)
    }
}

impl<T> IndexMut<Role> for RoleMap<T> {
    fn index_mut(&mut self, role: Role) -> &mut Self::Output {
        self.get_mut(role)
    }
}
