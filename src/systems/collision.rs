//! Pairwise collision detection and contact resolution.
//!
//! Every eligible pair in the working set is tested once per frame. A pair is
//! eligible when the layer/mask filter lets the colliders interact; it hits
//! when their boxes overlap.
//!
//! On a hit:
//!
//! 1. a [`CollisionEvent`] is emitted;
//! 2. triggers stop there;
//! 3. otherwise, when both parties carry [`Health`], each loses one point;
//! 4. a party whose health reached zero is destroyed and the surviving
//!    opponent, if it has a [`Score`], is credited with the victim's score
//!    value (or [`DEFAULT_KILL_POINTS`]). An opponent with [`Energy`] also
//!    regains energy equal to the victim's score value.
//!
//! Destroy-requested entities take no further part in the pass, so a bullet
//! cannot hit twice in one frame.

use glam::Vec2;
use log::debug;

use crate::components::collider::Collider;
use crate::components::energy::Energy;
use crate::components::health::Health;
use crate::components::score::Score;
use crate::components::tags::Archetype;
use crate::components::transform::Transform;
use crate::ecs::component::{ComponentKind, Signature};
use crate::ecs::entities::Entities;
use crate::ecs::entity::EntityId;
use crate::ecs::error::EcsError;
use crate::ecs::system::{System, SystemContext};
use crate::events::Event;
use crate::events::collision::{CollisionEvent, DamageEvent, KillEvent};

pub const PRIORITY: i32 = 15;
/// Damage dealt to each party of a contact.
pub const CONTACT_DAMAGE: i32 = 1;
/// Reward for destroying something that carries no Score.
pub const DEFAULT_KILL_POINTS: u32 = 10;

#[derive(Debug, Default)]
pub struct CollisionSystem;

impl CollisionSystem {
    pub fn new() -> Self {
        Self
    }
}

/// Position and collider of one working-set member, copied at pass start.
#[derive(Clone, Copy)]
struct Body {
    id: EntityId,
    position: Vec2,
    collider: Collider,
}

/// Alive for scoring purposes: not destroy-requested and not out of health.
fn survives(entities: &Entities, id: EntityId) -> bool {
    entities
        .get(id)
        .is_some_and(|e| e.is_active() && e.get::<Health>().is_none_or(|h| !h.is_dead()))
}

/// Apply contact damage to one party. Returns true if it died from it.
fn damage(ctx: &mut SystemContext<'_>, id: EntityId) -> Result<bool, EcsError> {
    let health = ctx.entities.require_mut(id)?.require_mut::<Health>()?;
    let taken = health.take_damage(CONTACT_DAMAGE);
    let remaining = health.current_health;
    let dead = health.is_dead();
    if taken > 0 {
        ctx.emit(Event::Damaged(DamageEvent {
            entity: id,
            amount: taken,
            remaining,
        }));
    }
    Ok(dead)
}

/// Destroy `victim` and reward `killer` if it survived the contact.
fn resolve_kill(
    ctx: &mut SystemContext<'_>,
    victim: EntityId,
    killer: EntityId,
) -> Result<(), EcsError> {
    let killer_alive = survives(ctx.entities, killer);

    let victim_entity = ctx.entities.require_mut(victim)?;
    let victim_archetype = Archetype::of(victim_entity);
    let victim_score = victim_entity.get::<Score>().map(|s| s.value);
    victim_entity.destroy();
    let points = victim_score.unwrap_or(DEFAULT_KILL_POINTS);

    let killer_entity = ctx.entities.require_mut(killer)?;
    let killer_archetype = Archetype::of(killer_entity);
    let mut credited = false;
    if killer_alive {
        if let Some(score) = killer_entity.get_mut::<Score>() {
            score.add(points);
            credited = true;
        }
        if let (Some(energy), Some(reward)) = (killer_entity.get_mut::<Energy>(), victim_score) {
            energy.restore(reward as f32);
        }
    }

    debug!(
        "{:?} {} destroyed by {:?} {} ({} points{})",
        victim_archetype,
        victim,
        killer_archetype,
        killer,
        points,
        if credited { "" } else { ", uncredited" }
    );
    ctx.emit(Event::Killed(KillEvent {
        victim,
        victim_archetype,
        killer,
        killer_archetype,
        points,
        victim_score,
        credited,
    }));
    Ok(())
}

impl System for CollisionSystem {
    fn name(&self) -> &'static str {
        "collision"
    }

    fn signature(&self) -> Signature {
        Signature::of(&[ComponentKind::Transform, ComponentKind::Collider])
    }

    fn priority(&self) -> i32 {
        PRIORITY
    }

    fn update(&mut self, ctx: &mut SystemContext<'_>, _dt: f32) -> Result<(), EcsError> {
        let mut bodies: Vec<Body> = Vec::with_capacity(ctx.members.len());
        for &id in ctx.members {
            let entity = ctx.entities.require(id)?;
            if !entity.is_active() {
                continue;
            }
            bodies.push(Body {
                id,
                position: entity.require::<Transform>()?.position(),
                collider: *entity.require::<Collider>()?,
            });
        }

        for (i, a) in bodies.iter().enumerate() {
            for b in &bodies[i + 1..] {
                if !ctx.entities.is_alive(a.id) {
                    break;
                }
                if !ctx.entities.is_alive(b.id) {
                    continue;
                }
                if !a.collider.can_collide_with(&b.collider)
                    || !a.collider.overlaps(a.position, &b.collider, b.position)
                {
                    continue;
                }

                let trigger = a.collider.is_trigger || b.collider.is_trigger;
                ctx.emit(Event::Collision(CollisionEvent {
                    a: a.id,
                    b: b.id,
                    trigger,
                }));
                if trigger {
                    continue;
                }

                let both_vital = ctx.entities.require(a.id)?.has::<Health>()
                    && ctx.entities.require(b.id)?.has::<Health>();
                if !both_vital {
                    continue;
                }
                let a_dead = damage(ctx, a.id)?;
                let b_dead = damage(ctx, b.id)?;
                if a_dead {
                    resolve_kill(ctx, a.id, b.id)?;
                }
                if b_dead {
                    resolve_kill(ctx, b.id, a.id)?;
                }
            }
        }
        Ok(())
    }
}
