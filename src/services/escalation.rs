//! Schedule policies and their ordered rule chains.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;
use validator::Validate;

use crate::db::DbConn;
use crate::error::{AppError, Result};
use crate::models::prelude::*;
use crate::models::{schedule_policy, schedule_policy_rule, service};
use crate::schemas::escalation::{CreatePolicy, CreateRule, MAX_REPEAT_TIMES};

pub async fn create_policy(db: &DbConn, req: CreatePolicy) -> Result<schedule_policy::Model> {
    req.validate()?;

    let policy = schedule_policy::ActiveModel {
        name: Set(req.name),
        repeat_times: Set(req.repeat_times),
        ..Default::default()
    }
    .insert(db)
    .await?;

    tracing::info!("Created schedule policy {}", policy.name);
    Ok(policy)
}

pub async fn get_policy(db: &DbConn, policy_id: i32) -> Result<schedule_policy::Model> {
    SchedulePolicy::find_by_id(policy_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Schedule policy {} not found", policy_id)))
}

/// Add a rule to a policy. Without an explicit position the rule goes after
/// the current last one.
pub async fn add_rule(
    db: &DbConn,
    policy_id: i32,
    req: CreateRule,
) -> Result<schedule_policy_rule::Model> {
    req.validate()?;
    get_policy(db, policy_id).await?;

    if let Some(user_id) = req.user_id {
        User::find_by_id(user_id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;
    }
    if let Some(calendar_id) = req.calendar_id {
        Calendar::find_by_id(calendar_id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Calendar {} not found", calendar_id)))?;
    }

    let position = match req.position {
        Some(position) => position,
        None => next_position(db, policy_id).await?,
    };

    let rule = schedule_policy_rule::ActiveModel {
        schedule_policy_id: Set(policy_id),
        position: Set(position),
        user_id: Set(req.user_id),
        calendar_id: Set(req.calendar_id),
        escalate_after: Set(req.escalate_after),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(rule)
}

async fn next_position(db: &DbConn, policy_id: i32) -> Result<i32> {
    let last: Option<Option<i32>> = SchedulePolicyRule::find()
        .select_only()
        .column_as(schedule_policy_rule::Column::Position.max(), "max_position")
        .filter(schedule_policy_rule::Column::SchedulePolicyId.eq(policy_id))
        .into_tuple()
        .one(db)
        .await?;

    Ok(last.flatten().map_or(0, |max| max + 1))
}

/// Rules of a policy in escalation order
pub async fn rules_for_policy(
    db: &DbConn,
    policy_id: i32,
) -> Result<Vec<schedule_policy_rule::Model>> {
    let rules = SchedulePolicyRule::find()
        .filter(schedule_policy_rule::Column::SchedulePolicyId.eq(policy_id))
        .order_by_asc(schedule_policy_rule::Column::Position)
        .order_by_asc(schedule_policy_rule::Column::Id)
        .all(db)
        .await?;
    Ok(rules)
}

/// The full paging sequence of a policy: one pass over its rules plus
/// `repeat_times` further passes, at most [`MAX_REPEAT_TIMES`].
pub async fn escalation_path(
    db: &DbConn,
    policy_id: i32,
) -> Result<Vec<schedule_policy_rule::Model>> {
    let policy = get_policy(db, policy_id).await?;
    let rules = rules_for_policy(db, policy_id).await?;
    if policy.repeat_times > MAX_REPEAT_TIMES {
        tracing::warn!(
            "Policy {} repeats {} times, capping escalation path at {}",
            policy.name,
            policy.repeat_times,
            MAX_REPEAT_TIMES
        );
    }
    Ok(expand_passes(&rules, policy.repeat_times))
}

fn expand_passes(
    rules: &[schedule_policy_rule::Model],
    repeat_times: i32,
) -> Vec<schedule_policy_rule::Model> {
    let passes = usize::try_from(repeat_times.min(MAX_REPEAT_TIMES)).unwrap_or(0) + 1;
    let mut path = Vec::with_capacity(rules.len() * passes);
    for _ in 0..passes {
        path.extend_from_slice(rules);
    }
    path
}

/// Attach a policy to a service, or detach with `None`
pub async fn assign_policy(
    db: &DbConn,
    service_id: Uuid,
    policy_id: Option<i32>,
) -> Result<service::Model> {
    let found = Service::find_by_id(service_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Service {} not found", service_id)))?;

    if let Some(policy_id) = policy_id {
        get_policy(db, policy_id).await?;
    }

    let mut active: service::ActiveModel = found.into();
    active.policy_id = Set(policy_id);
    let updated = active.update(db).await?;
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(id: i32, position: i32) -> schedule_policy_rule::Model {
        schedule_policy_rule::Model {
            id,
            schedule_policy_id: 1,
            position,
            user_id: None,
            calendar_id: None,
            escalate_after: 10,
        }
    }

    #[test]
    fn test_expand_passes_single_pass() {
        let rules = vec![rule(1, 0), rule(2, 1)];
        let path = expand_passes(&rules, 0);
        assert_eq!(path, rules);
    }

    #[test]
    fn test_expand_passes_repeats_in_order() {
        let rules = vec![rule(1, 0), rule(2, 1)];
        let ids: Vec<i32> = expand_passes(&rules, 2).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 1, 2, 1, 2]);
    }

    #[test]
    fn test_expand_passes_negative_repeat_is_one_pass() {
        let rules = vec![rule(1, 0)];
        assert_eq!(expand_passes(&rules, -3).len(), 1);
    }

    #[test]
    fn test_expand_passes_caps_oversized_repeat() {
        let rules = vec![rule(1, 0), rule(2, 1)];
        let expected = rules.len() * (MAX_REPEAT_TIMES as usize + 1);
        assert_eq!(expand_passes(&rules, i32::MAX).len(), expected);
    }

    #[test]
    fn test_expand_passes_empty_rules() {
        assert!(expand_passes(&[], 5).is_empty());
    }
}
