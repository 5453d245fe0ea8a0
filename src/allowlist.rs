const ALARM_PREFIX: &str = "alarm";
const DB_SERVER_NAME: &str = "DatabaseServer";
const APP_SERVER_NAME: &str = "AppServer";

const DB_SERVER_METRICS: [&str; 4] = [
    "CPUUtilization",
    "DiskQueueDepth",
    "FreeableMemory",
    "FreeStorageSpace",
];
const APP_SERVER_METRICS: [&str; 1] = ["TargetResponseRate"];

/// The fixed set of alarm names this bridge is permitted to forward.
///
/// Built once at startup from the environment name; membership is exact,
/// case-sensitive string equality.
#[derive(Clone, Debug)]
pub struct AllowList {
    names: Vec<String>,
}

impl AllowList {
    pub fn for_environment(environment: &str) -> Self {
        let mut names = Vec::with_capacity(DB_SERVER_METRICS.len() + APP_SERVER_METRICS.len());

        for metric in DB_SERVER_METRICS {
            names.push(format!("{ALARM_PREFIX}{environment}{DB_SERVER_NAME}{metric}"));
        }
        for metric in APP_SERVER_METRICS {
            names.push(format!("{ALARM_PREFIX}{environment}{APP_SERVER_NAME}{metric}"));
        }

        Self { names }
    }

    pub fn contains(&self, alarm_name: &str) -> bool {
        self.names.iter().any(|name| name == alarm_name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_five_names_for_prod() {
        let allow = AllowList::for_environment("Prod");
        assert_eq!(
            allow.names(),
            &[
                "alarmProdDatabaseServerCPUUtilization",
                "alarmProdDatabaseServerDiskQueueDepth",
                "alarmProdDatabaseServerFreeableMemory",
                "alarmProdDatabaseServerFreeStorageSpace",
                "alarmProdAppServerTargetResponseRate",
            ]
        );
    }

    #[test]
    fn membership_is_exact() {
        let allow = AllowList::for_environment("Staging");
        assert!(allow.contains("alarmStagingDatabaseServerCPUUtilization"));
        assert!(allow.contains("alarmStagingAppServerTargetResponseRate"));
        assert!(!allow.contains("alarmProdDatabaseServerCPUUtilization"));
        assert!(!allow.contains("somethingElseEntirely"));
    }

    #[test]
    fn membership_is_case_sensitive() {
        let allow = AllowList::for_environment("Prod");
        assert!(!allow.contains("alarmproddatabaseservercpuutilization"));
        assert!(!allow.contains("ALARMPRODDATABASESERVERCPUUTILIZATION"));
    }
}
