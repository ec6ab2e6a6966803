use crate::domain::models::{
    assignment::{self, SiteAssignment},
    client::Client,
    daily_log::{DailyLog, DailyLogEntry},
    database::Database,
    incident::Incident,
    material::Material,
    organization::Organization,
    site::{self, Site},
    site_material::SiteMaterial,
    user::{self, User},
    worker::Worker,
};
use chrono::NaiveDate;
use uuid::Uuid;

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

/// The demo dataset written on first store access: one organization, an
/// org admin and an org manager (each mirrored by a worker record via
/// email), three plain workers, three materials, one client, two sites,
/// the manager assigned as site manager of Site A, and one day of log
/// data. Ids are generated fresh per seeding; everything else is fixed.
pub fn default_database() -> Database {
    let org_id = new_id();
    let admin_user_id = new_id();
    let admin_worker_id = new_id();
    let manager_user_id = new_id();
    let manager_worker_id = new_id();
    let worker1_id = new_id();
    let worker2_id = new_id();
    let worker3_id = new_id();
    let site_a_id = new_id();
    let site_b_id = new_id();
    let material1_id = new_id();
    let material2_id = new_id();
    let material3_id = new_id();
    let client1_id = new_id();
    let daily_log_id = new_id();

    Database {
        organizations: vec![Organization {
            id: org_id.clone(),
            name: "Baumate Construction Ltd".to_string(),
            address: Some("123 Builder Street, Construction City, 12345".to_string()),
        }],
        users: vec![
            User {
                id: admin_user_id.clone(),
                name: "Admin User".to_string(),
                email: "admin@baumate.com".to_string(),
                role: user::ROLE_ORG_ADMIN.to_string(),
                organization_id: Some(org_id.clone()),
                language: Some("hr".to_string()),
            },
            User {
                id: manager_user_id.clone(),
                name: "Manager User".to_string(),
                email: "manager@baumate.com".to_string(),
                role: user::ROLE_ORG_MANAGER.to_string(),
                organization_id: Some(org_id.clone()),
                language: Some("hr".to_string()),
            },
        ],
        workers: vec![
            Worker {
                id: admin_worker_id.clone(),
                name: "Admin Worker".to_string(),
                email: Some("admin@baumate.com".to_string()),
                phone: Some("+1234567890".to_string()),
                organization_id: Some(org_id.clone()),
            },
            Worker {
                id: manager_worker_id.clone(),
                name: "Manager Worker".to_string(),
                email: Some("manager@baumate.com".to_string()),
                phone: Some("+1234567891".to_string()),
                organization_id: Some(org_id.clone()),
            },
            Worker {
                id: worker1_id.clone(),
                name: "John Doe".to_string(),
                email: Some("john.doe@baumate.com".to_string()),
                phone: Some("+1234567892".to_string()),
                organization_id: Some(org_id.clone()),
            },
            Worker {
                id: worker2_id.clone(),
                name: "Jane Smith".to_string(),
                email: Some("jane.smith@baumate.com".to_string()),
                phone: Some("+1234567893".to_string()),
                organization_id: Some(org_id.clone()),
            },
            Worker {
                id: worker3_id.clone(),
                name: "Bob Johnson".to_string(),
                email: Some("bob.johnson@baumate.com".to_string()),
                phone: Some("+1234567894".to_string()),
                organization_id: Some(org_id.clone()),
            },
        ],
        materials: vec![
            Material {
                id: material1_id.clone(),
                name: "Concrete".to_string(),
                unit: "m³".to_string(),
                description: Some("Standard concrete mix".to_string()),
                organization_id: Some(org_id.clone()),
            },
            Material {
                id: material2_id.clone(),
                name: "Steel Rebar".to_string(),
                unit: "kg".to_string(),
                description: Some("Reinforcement steel bars".to_string()),
                organization_id: Some(org_id.clone()),
            },
            Material {
                id: material3_id,
                name: "Bricks".to_string(),
                unit: "pieces".to_string(),
                description: Some("Standard red bricks".to_string()),
                organization_id: Some(org_id.clone()),
            },
        ],
        sites: vec![
            Site {
                id: site_a_id.clone(),
                name: "Site A - Office Building".to_string(),
                address: "456 Construction Ave, Building Town".to_string(),
                city: Some("Building Town".to_string()),
                organization_id: org_id.clone(),
                client_id: Some(client1_id.clone()),
                status: Some(site::STATUS_ACTIVE.to_string()),
                start_date: Some(date(2025, 1, 15)),
                end_date: Some(date(2025, 12, 31)),
            },
            Site {
                id: site_b_id,
                name: "Site B - Residential Complex".to_string(),
                address: "789 Development Rd, Housing City".to_string(),
                city: Some("Housing City".to_string()),
                organization_id: org_id,
                client_id: None,
                status: Some(site::STATUS_PLANNING.to_string()),
                start_date: Some(date(2025, 3, 1)),
                end_date: Some(date(2026, 2, 28)),
            },
        ],
        assignments: vec![
            SiteAssignment {
                id: new_id(),
                site_id: site_a_id.clone(),
                worker_id: manager_worker_id,
                role: assignment::ROLE_SITE_MANAGER.to_string(),
                assigned_date: date(2025, 1, 15),
                start_date: Some(date(2025, 1, 15)),
                end_date: Some(date(2025, 12, 31)),
            },
            SiteAssignment {
                id: new_id(),
                site_id: site_a_id.clone(),
                worker_id: worker1_id.clone(),
                role: assignment::ROLE_WORKER.to_string(),
                assigned_date: date(2025, 1, 20),
                start_date: Some(date(2025, 1, 20)),
                end_date: Some(date(2025, 6, 30)),
            },
            SiteAssignment {
                id: new_id(),
                site_id: site_a_id.clone(),
                worker_id: worker2_id.clone(),
                role: assignment::ROLE_WORKER.to_string(),
                assigned_date: date(2025, 1, 20),
                start_date: Some(date(2025, 1, 20)),
                end_date: Some(date(2025, 12, 31)),
            },
            SiteAssignment {
                id: new_id(),
                site_id: site_a_id.clone(),
                worker_id: worker3_id,
                role: assignment::ROLE_WORKER.to_string(),
                assigned_date: date(2025, 1, 22),
                start_date: Some(date(2025, 1, 22)),
                end_date: Some(date(2025, 8, 31)),
            },
        ],
        site_materials: vec![
            SiteMaterial {
                id: new_id(),
                site_id: site_a_id.clone(),
                material_id: material1_id,
                planned_qty: Some(100.0),
                actual_qty: Some(45.0),
            },
            SiteMaterial {
                id: new_id(),
                site_id: site_a_id.clone(),
                material_id: material2_id,
                planned_qty: Some(5000.0),
                actual_qty: Some(2300.0),
            },
        ],
        daily_logs: vec![DailyLog {
            id: daily_log_id.clone(),
            site_id: site_a_id.clone(),
            date: date(2025, 11, 5),
            created_by: manager_user_id.clone(),
            notes: Some("Good progress today, weather was favorable".to_string()),
        }],
        daily_log_entries: vec![
            DailyLogEntry {
                id: new_id(),
                daily_log_id: daily_log_id.clone(),
                worker_id: worker1_id,
                start_time: "08:00".to_string(),
                end_time: "17:00".to_string(),
                break_minutes: 60,
                notes: Some("Foundation work".to_string()),
            },
            DailyLogEntry {
                id: new_id(),
                daily_log_id,
                worker_id: worker2_id,
                start_time: "08:00".to_string(),
                end_time: "17:00".to_string(),
                break_minutes: 60,
                notes: Some("Concrete pouring".to_string()),
            },
        ],
        clients: vec![Client {
            id: client1_id,
            name: "ABC Corporation".to_string(),
            email: Some("contact@abc-corp.com".to_string()),
            phone: Some("+1987654321".to_string()),
            company: Some("ABC Corporation".to_string()),
        }],
        incidents: vec![Incident {
            id: new_id(),
            site_id: site_a_id,
            date: date(2025, 11, 3),
            reported_by: manager_user_id,
            severity: "low".to_string(),
            description: "Minor equipment malfunction, quickly resolved".to_string(),
            resolved: true,
        }],
        admin_worker_id: Some(admin_worker_id),
    }
}
