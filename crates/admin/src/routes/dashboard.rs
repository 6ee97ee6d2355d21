//! Role dashboards.
//!
//! Each dashboard is a fixed layout of stat cards and one bar chart. The
//! affiliate dashboard shows sample referral figures; the super-admin
//! dashboard reads platform totals and falls back to an empty chart when the
//! database is unavailable.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use axum::response::Redirect;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use cafe_desk_core::{
    ChartBar, ChartData, ChartPoint, CurrencyCode, DashboardKind, Price, StatCard, UserRole,
};

use crate::db::StatsRepository;
use crate::error::AppError;
use crate::models::PlatformTotals;
use crate::state::AppState;

/// Sidebar link.
#[derive(Debug, Clone)]
pub struct NavLink {
    pub title: &'static str,
    pub href: String,
    pub active: bool,
}

impl NavLink {
    fn all(current: DashboardKind) -> Vec<Self> {
        DashboardKind::ALL
            .into_iter()
            .map(|kind| Self {
                title: kind.title(),
                href: kind.path(),
                active: kind == current,
            })
            .collect()
    }
}

/// Dashboard page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub title: &'static str,
    pub nav: Vec<NavLink>,
    pub cards: Vec<StatCard>,
    pub chart_title: &'static str,
    pub bars: Vec<ChartBar>,
    pub chart_is_placeholder: bool,
}

impl DashboardTemplate {
    /// Assemble a page from display data.
    #[must_use]
    pub fn new(
        kind: DashboardKind,
        cards: Vec<StatCard>,
        chart_title: &'static str,
        points: Option<Vec<ChartPoint>>,
    ) -> Self {
        let chart = ChartData::from_points(points);
        Self {
            title: kind.title(),
            nav: NavLink::all(kind),
            cards,
            chart_title,
            bars: chart.bars(),
            chart_is_placeholder: chart.is_placeholder(),
        }
    }

    /// The affiliate dashboard with its sample referral figures.
    #[must_use]
    pub fn affiliate() -> Self {
        let commission = Price::from_minor_units(124_050, CurrencyCode::USD);
        let cards = vec![
            StatCard::new("Referred shops", 12).with_caption("since joining"),
            StatCard::new("Active this month", 9),
            StatCard::new("Commission earned", commission.display()),
            StatCard::new(
                "Pending payout",
                Price::new(Decimal::new(18_000, 2), CurrencyCode::USD),
            ),
        ];
        let referrals = [
            ("Jan", 1.0),
            ("Feb", 2.0),
            ("Mar", 1.0),
            ("Apr", 3.0),
            ("May", 2.0),
            ("Jun", 3.0),
        ]
        .into_iter()
        .map(|(month, n)| ChartPoint::new(month, n))
        .collect();

        Self::new(
            DashboardKind::Affiliate,
            cards,
            "Referrals per month",
            Some(referrals),
        )
    }

    /// The super-admin dashboard for the given totals.
    #[must_use]
    pub fn super_admin(totals: &PlatformTotals) -> Self {
        Self::new(
            DashboardKind::SuperAdmin,
            totals.cards(),
            "Shops by currency",
            Some(totals.currency_points()),
        )
    }
}

/// Query string for `/dashboard`.
#[derive(Debug, Deserialize)]
pub struct RoleQuery {
    pub role: String,
}

/// Redirect a role to the dashboard it may view.
///
/// # Errors
///
/// Returns 400 for an unknown role and 403 for a role without a dashboard.
#[instrument]
pub async fn for_role(Query(query): Query<RoleQuery>) -> Result<Redirect, AppError> {
    let role: UserRole = query
        .role
        .parse()
        .map_err(|e: cafe_desk_core::RoleError| AppError::BadRequest(e.to_string()))?;

    let kind = role
        .dashboard()
        .ok_or_else(|| AppError::Forbidden(format!("{role} has no dashboard")))?;

    Ok(Redirect::to(&kind.path()))
}

/// Affiliate dashboard.
#[instrument]
pub async fn affiliate() -> DashboardTemplate {
    DashboardTemplate::affiliate()
}

/// Super-admin dashboard.
#[instrument(skip(state))]
pub async fn super_admin(State(state): State<AppState>) -> DashboardTemplate {
    let totals = match StatsRepository::new(state.pool()).platform_totals().await {
        Ok(totals) => totals,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load platform totals, rendering empty dashboard");
            PlatformTotals::default()
        }
    };
    DashboardTemplate::super_admin(&totals)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_affiliate_renders_cards_and_chart() {
        let html = DashboardTemplate::affiliate().render().unwrap();
        assert!(html.contains("Affiliate Dashboard"));
        assert!(html.contains("$1240.50"));
        assert!(html.contains("Referrals per month"));
        assert!(html.contains("Jun"));
        assert!(!html.contains("No data"));
    }

    #[test]
    fn test_empty_totals_render_placeholder_chart() {
        let page = DashboardTemplate::super_admin(&PlatformTotals::default());
        assert!(page.chart_is_placeholder);
        assert_eq!(page.bars.len(), 1);

        let html = page.render().unwrap();
        assert!(html.contains("No data"));
    }

    #[test]
    fn test_super_admin_renders_exactly_passed_points() {
        let totals = PlatformTotals {
            shops: 3,
            users_by_role: vec![(UserRole::CafeOwner, 3)],
            shops_by_currency: vec![("USD".to_owned(), 2), ("EUR".to_owned(), 1)],
        };
        let page = DashboardTemplate::super_admin(&totals);
        assert!(!page.chart_is_placeholder);
        let labels: Vec<&str> = page.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["USD", "EUR"]);
    }

    #[test]
    fn test_nav_marks_current_dashboard() {
        let nav = NavLink::all(DashboardKind::SuperAdmin);
        assert_eq!(nav.len(), 2);
        assert!(!nav[0].active);
        assert!(nav[1].active);
        assert_eq!(nav[1].href, "/dashboard/super-admin");
    }
}
