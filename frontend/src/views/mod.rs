pub mod banking;
pub mod chat;
pub mod receivables;
pub mod sessions;
pub mod settings;
pub mod shared;

use crate::config::DashboardKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Records,
    Payments,
    Analytics,
    Sessions,
    Settings,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Dashboard,
        Page::Records,
        Page::Payments,
        Page::Analytics,
        Page::Sessions,
        Page::Settings,
    ];

    /// Sidebar label; the two dashboards name their record and payment pages
    /// differently.
    pub fn label(self, dashboard: DashboardKind) -> &'static str {
        match (self, dashboard) {
            (Page::Dashboard, _) => "Dashboard",
            (Page::Records, DashboardKind::Banking) => "Transactions",
            (Page::Records, DashboardKind::Receivables) => "Invoices",
            (Page::Payments, DashboardKind::Banking) => "Transfer",
            (Page::Payments, DashboardKind::Receivables) => "Payments",
            (Page::Analytics, _) => "Analytics",
            (Page::Sessions, _) => "Chat Sessions",
            (Page::Settings, _) => "Settings",
        }
    }

    pub fn uses_snapshot(self) -> bool {
        match self {
            Page::Dashboard | Page::Records | Page::Payments | Page::Analytics => true,
            Page::Sessions | Page::Settings => false,
        }
    }
}
