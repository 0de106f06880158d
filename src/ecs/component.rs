//! Component kinds, the typed component trait and signatures.
//!
//! Every component type the game knows about is listed once in the
//! `component_registry!` invocation at the bottom of this file. The macro
//! generates:
//!
//! - [`ComponentKind`], a fixed enumeration used as the slot index inside an
//!   [`Entity`](super::entity::Entity) and as the bit position in a
//!   [`Signature`];
//! - [`AnyComponent`], the tagged union stored in those slots;
//! - a [`Component`] impl for each listed type, giving typed access without any
//!   string-keyed lookup.

use std::fmt;

use arrayvec::ArrayVec;

use crate::components::acceleration::Acceleration;
use crate::components::collider::Collider;
use crate::components::enemyai::EnemyAi;
use crate::components::energy::Energy;
use crate::components::health::Health;
use crate::components::playercontroller::PlayerController;
use crate::components::projectile::Projectile;
use crate::components::rigidbody::RigidBody;
use crate::components::score::Score;
use crate::components::sprite::Sprite;
use crate::components::tags::{Background, Bullet, Enemy, Player, PowerUp, Rock, Ui};
use crate::components::transform::Transform;
use crate::components::velocity::Velocity;

/// Typed view over one variant of [`AnyComponent`].
///
/// Implemented by `component_registry!` for every registered type; there is
/// no reason to implement it by hand.
pub trait Component: Sized + 'static {
    const KIND: ComponentKind;

    fn into_any(self) -> AnyComponent;
    fn from_any(any: &AnyComponent) -> Option<&Self>;
    fn from_any_mut(any: &mut AnyComponent) -> Option<&mut Self>;
    fn from_any_owned(any: AnyComponent) -> Option<Self>;
}

macro_rules! component_registry {
    ($($kind:ident => $ty:ty),+ $(,)?) => {
        /// Identifier of a component type. The discriminant doubles as the
        /// slot index and the signature bit.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ComponentKind {
            $($kind),+
        }

        impl ComponentKind {
            /// Every kind, in discriminant order.
            pub const ALL: &'static [ComponentKind] = &[$(ComponentKind::$kind),+];
            /// Number of registered kinds.
            pub const COUNT: usize = Self::ALL.len();

            pub fn name(self) -> &'static str {
                match self {
                    $(ComponentKind::$kind => stringify!($kind)),+
                }
            }

            #[inline]
            pub const fn index(self) -> usize {
                self as usize
            }

            #[inline]
            pub const fn bit(self) -> u32 {
                1 << (self as u32)
            }
        }

        /// A component value of any registered kind.
        #[derive(Clone, Debug)]
        pub enum AnyComponent {
            $($kind($ty)),+
        }

        impl AnyComponent {
            pub fn kind(&self) -> ComponentKind {
                match self {
                    $(AnyComponent::$kind(_) => ComponentKind::$kind),+
                }
            }
        }

        $(
            impl Component for $ty {
                const KIND: ComponentKind = ComponentKind::$kind;

                #[inline]
                fn into_any(self) -> AnyComponent {
                    AnyComponent::$kind(self)
                }

                #[inline]
                fn from_any(any: &AnyComponent) -> Option<&Self> {
                    match any {
                        AnyComponent::$kind(c) => Some(c),
                        #[allow(unreachable_patterns)]
                        _ => None,
                    }
                }

                #[inline]
                fn from_any_mut(any: &mut AnyComponent) -> Option<&mut Self> {
                    match any {
                        AnyComponent::$kind(c) => Some(c),
                        #[allow(unreachable_patterns)]
                        _ => None,
                    }
                }

                #[inline]
                fn from_any_owned(any: AnyComponent) -> Option<Self> {
                    match any {
                        AnyComponent::$kind(c) => Some(c),
                        #[allow(unreachable_patterns)]
                        _ => None,
                    }
                }
            }
        )+
    };
}

component_registry! {
    Transform => Transform,
    Velocity => Velocity,
    Acceleration => Acceleration,
    Sprite => Sprite,
    RigidBody => RigidBody,
    Collider => Collider,
    PlayerController => PlayerController,
    EnemyAi => EnemyAi,
    Projectile => Projectile,
    Health => Health,
    Energy => Energy,
    Score => Score,
    Player => Player,
    Enemy => Enemy,
    Bullet => Bullet,
    Rock => Rock,
    PowerUp => PowerUp,
    Ui => Ui,
    Background => Background,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of component kinds, stored as a bitmask.
///
/// Systems declare the signature they require; entities report the signature
/// they currently have. An entity matches a system when the system's
/// signature is a subset of the entity's.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Signature(u32);

impl Signature {
    pub const EMPTY: Signature = Signature(0);

    /// Build a signature from a list of kinds.
    pub const fn of(kinds: &[ComponentKind]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < kinds.len() {
            bits |= kinds[i].bit();
            i += 1;
        }
        Signature(bits)
    }

    #[must_use]
    pub const fn with(self, kind: ComponentKind) -> Self {
        Signature(self.0 | kind.bit())
    }

    #[must_use]
    pub const fn without(self, kind: ComponentKind) -> Self {
        Signature(self.0 & !kind.bit())
    }

    #[inline]
    pub const fn contains(self, kind: ComponentKind) -> bool {
        self.0 & kind.bit() != 0
    }

    /// True when every kind in `self` is also in `other`.
    #[inline]
    pub const fn is_subset_of(self, other: Signature) -> bool {
        self.0 & other.0 == self.0
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// The kinds in this signature, in discriminant order.
    pub fn kinds(self) -> ArrayVec<ComponentKind, { ComponentKind::COUNT }> {
        ComponentKind::ALL
            .iter()
            .copied()
            .filter(|k| self.contains(*k))
            .collect()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.kinds().iter().map(|k| k.name()).collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_indexed_in_order() {
        for (i, kind) in ComponentKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
        assert_eq!(ComponentKind::COUNT, 19);
        assert!(ComponentKind::COUNT <= 32, "signature bits must fit in a u32");
    }

    #[test]
    fn any_component_round_trips_through_typed_view() {
        let any = Transform::new(3.0, 4.0).into_any();
        assert_eq!(any.kind(), ComponentKind::Transform);
        assert!(Transform::from_any(&any).is_some());
        assert!(Velocity::from_any(&any).is_none());
    }

    #[test]
    fn signature_subset() {
        let movement = Signature::of(&[ComponentKind::Transform, ComponentKind::Velocity]);
        let ship = movement
            .with(ComponentKind::Sprite)
            .with(ComponentKind::Player);
        assert!(movement.is_subset_of(ship));
        assert!(!ship.is_subset_of(movement));
        assert!(Signature::EMPTY.is_subset_of(movement));
        assert_eq!(ship.len(), 4);
    }

    #[test]
    fn signature_without_removes_kind() {
        let sig = Signature::of(&[ComponentKind::Health, ComponentKind::Score]);
        let sig = sig.without(ComponentKind::Score);
        assert!(sig.contains(ComponentKind::Health));
        assert!(!sig.contains(ComponentKind::Score));
    }

    #[test]
    fn signature_display_lists_names() {
        let sig = Signature::of(&[ComponentKind::Velocity, ComponentKind::Transform]);
        assert_eq!(sig.to_string(), "{Transform, Velocity}");
    }
}
