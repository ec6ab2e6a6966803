/// The API collections. `organizations` is stored in the document but has
/// no endpoint, so it does not appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Users,
    Workers,
    Materials,
    Sites,
    Assignments,
    SiteMaterials,
    DailyLogs,
    DailyLogEntries,
    Clients,
    Incidents,
}

impl Collection {
    /// Resolves a URL path segment (`/api/<segment>`) to a collection.
    /// The mapping is fixed and case-sensitive.
    pub fn from_path_segment(segment: &str) -> Option<Self> {
        match segment {
            "users" => Some(Self::Users),
            "workers" => Some(Self::Workers),
            "materials" => Some(Self::Materials),
            "sites" => Some(Self::Sites),
            "assignments" => Some(Self::Assignments),
            "site-materials" => Some(Self::SiteMaterials),
            "daily-logs" => Some(Self::DailyLogs),
            "daily-log-entries" => Some(Self::DailyLogEntries),
            "clients" => Some(Self::Clients),
            "incidents" => Some(Self::Incidents),
            _ => None,
        }
    }

    /// The collection's key in the stored document, also used in
    /// client-facing error messages.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Workers => "workers",
            Self::Materials => "materials",
            Self::Sites => "sites",
            Self::Assignments => "assignments",
            Self::SiteMaterials => "siteMaterials",
            Self::DailyLogs => "dailyLogs",
            Self::DailyLogEntries => "dailyLogEntries",
            Self::Clients => "clients",
            Self::Incidents => "incidents",
        }
    }
}
