use crate::domain::collection::Collection;
use crate::domain::models::{
    assignment,
    database::Database,
    user::{self, User},
    worker::Worker,
};
use crate::error::AppError;
use axum::http::Method;
use serde_json::Value;

/// Role-based access decision for one request. Rules, in order:
///
/// 1. Unauthenticated GET on `users` is allowed (the login screen lists
///    selectable accounts).
/// 2. Any other request without a resolvable user is 401.
/// 3. DELETE on the org admin's own worker record is 403 for every role,
///    the admin included.
/// 4. `admin` / `org_admin` may do anything else.
/// 5. `org_manager` may read everything, but mutate only daily logs and
///    daily log entries on sites where they hold a `site_manager`
///    assignment.
/// 6. Anything else an authenticated user asks for is a read and is
///    allowed.
pub fn check(
    db: &Database,
    caller: Option<&str>,
    method: &Method,
    collection: Collection,
    resource_id: Option<&str>,
    body: Option<&Value>,
) -> Result<(), AppError> {
    if caller.is_none() && collection == Collection::Users && *method == Method::GET {
        return Ok(());
    }

    let user = caller
        .and_then(|id| db.user_by_id(id))
        .ok_or(AppError::Unauthorized)?;

    if *method == Method::DELETE && collection == Collection::Workers {
        if let (Some(id), Some(protected)) = (resource_id, db.admin_worker_id.as_deref()) {
            if id == protected {
                return Err(AppError::Forbidden(
                    "Cannot delete the organization admin's worker".to_string(),
                ));
            }
        }
    }

    if user.is_tenant_admin() {
        return Ok(());
    }

    if user.role == user::ROLE_ORG_MANAGER {
        return check_manager(db, user, method, collection, resource_id, body);
    }

    Ok(())
}

fn check_manager(
    db: &Database,
    user: &User,
    method: &Method,
    collection: Collection,
    resource_id: Option<&str>,
    body: Option<&Value>,
) -> Result<(), AppError> {
    if collection == Collection::DailyLogs || collection == Collection::DailyLogEntries {
        if *method == Method::GET {
            return Ok(());
        }

        let site_id = match collection {
            Collection::DailyLogs => daily_log_site(db, resource_id, body),
            _ => entry_site(db, resource_id, body),
        };

        if let Some(site_id) = site_id {
            if is_site_manager(db, user, &site_id) {
                return Ok(());
            }
        }

        return Err(AppError::Forbidden(
            "Managers can only modify daily logs on sites they manage".to_string(),
        ));
    }

    if *method != Method::GET {
        return Err(AppError::Forbidden("Insufficient permissions".to_string()));
    }

    Ok(())
}

/// Site of the daily log under mutation: from the body on POST, from the
/// stored log on PUT/DELETE.
fn daily_log_site(db: &Database, resource_id: Option<&str>, body: Option<&Value>) -> Option<String> {
    body.and_then(|b| b.get("siteId"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .or_else(|| {
            let id = resource_id?;
            db.daily_logs
                .iter()
                .find(|log| log.id == id)
                .map(|log| log.site_id.clone())
        })
}

/// Site of the entry's parent daily log, resolved through the
/// entry → dailyLog → site chain.
fn entry_site(db: &Database, resource_id: Option<&str>, body: Option<&Value>) -> Option<String> {
    let daily_log_id = body
        .and_then(|b| b.get("dailyLogId"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .or_else(|| {
            let id = resource_id?;
            db.daily_log_entries
                .iter()
                .find(|entry| entry.id == id)
                .map(|entry| entry.daily_log_id.clone())
        })?;

    db.daily_logs
        .iter()
        .find(|log| log.id == daily_log_id)
        .map(|log| log.site_id.clone())
}

/// The worker record behind a user account. The link is denormalized:
/// email equality, nothing else.
pub fn find_worker_for_user<'a>(db: &'a Database, user: &User) -> Option<&'a Worker> {
    db.workers
        .iter()
        .find(|w| w.email.as_deref() == Some(user.email.as_str()))
}

/// Whether the user's worker record holds a `site_manager` assignment on
/// the given site.
pub fn is_site_manager(db: &Database, user: &User, site_id: &str) -> bool {
    let Some(worker) = find_worker_for_user(db, user) else {
        return false;
    };
    db.assignments.iter().any(|a| {
        a.site_id == site_id && a.worker_id == worker.id && a.role == assignment::ROLE_SITE_MANAGER
    })
}
