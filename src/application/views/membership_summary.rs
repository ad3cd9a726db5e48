use crate::{
    application::{
        date_format::{capitalize, format_iso_date},
        markup::{Element, Node},
    },
    domain::entities::account_record::AccountRecord,
};

pub const MEMBERSHIP_SUMMARY_CONTAINER: &str = "membershipSummary";

/// Status line split so the date can be emphasised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub phrase: &'static str,
    pub date: String,
}

impl StatusLine {
    pub fn text(&self) -> String {
        format!("{} {}", self.phrase, self.date)
    }
}

/// What the membership panel shows for a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipSummary {
    pub plan: String,
    /// `None` for a status with no wording; the row then renders empty.
    pub status: Option<StatusLine>,
    pub billing: String,
}

impl MembershipSummary {
    pub fn from_record(record: &AccountRecord) -> Self {
        let renewal = format_iso_date(&record.renewal_date_iso)
            .unwrap_or_else(|| record.renewal_date_iso.clone());

        let status = record
            .subscription_status
            .status_phrase()
            .map(|phrase| StatusLine {
                phrase,
                date: renewal,
            });

        let billing = if record.billing_provider.is_direct() {
            record.payment.clone()
        } else {
            format!(
                "Billed through {}",
                capitalize(record.billing_provider.as_str())
            )
        };

        Self {
            plan: record.plan.clone(),
            status,
            billing,
        }
    }

    pub fn status_text(&self) -> String {
        self.status.as_ref().map(StatusLine::text).unwrap_or_default()
    }

    pub fn render(&self) -> Vec<Element> {
        let status_value = match &self.status {
            Some(line) => Element::new("div")
                .class("v")
                .child(Node::text(format!("{} ", line.phrase)))
                .child(Element::new("strong").text(line.date.clone())),
            None => Element::new("div").class("v"),
        };

        vec![
            row("Plan", Element::new("div").class("v").text(self.plan.clone())),
            row("Status", status_value),
            row(
                "Billing",
                Element::new("div").class("v").text(self.billing.clone()),
            ),
        ]
    }
}

fn row(label: &str, value: Element) -> Element {
    Element::new("div")
        .class("kv")
        .child(Element::new("div").class("k").text(label))
        .child(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::entities::{
            billing_provider::BillingProvider, subscription_status::SubscriptionStatus,
        },
        test_utils::create_test_record,
    };

    #[test]
    fn test_paused_status_line() {
        let record = create_test_record(|r| {
            r.subscription_status = SubscriptionStatus::Paused;
            r.renewal_date_iso = "2026-03-18".into();
        });
        let summary = MembershipSummary::from_record(&record);
        assert_eq!(summary.status_text(), "Paused until March 18, 2026");
    }

    #[test]
    fn test_active_and_cancelled_status_lines() {
        let active = create_test_record(|r| r.renewal_date_iso = "2025-07-04".into());
        assert_eq!(
            MembershipSummary::from_record(&active).status_text(),
            "Renews on July 4, 2025"
        );

        let cancelled = create_test_record(|r| r.subscription_status = SubscriptionStatus::Cancelled);
        assert_eq!(
            MembershipSummary::from_record(&cancelled).status_text(),
            "Active until March 18, 2026"
        );
    }

    #[test]
    fn test_unrecognized_status_is_blank() {
        let record = create_test_record(|r| {
            r.subscription_status = SubscriptionStatus::Unrecognized("expired".into())
        });
        let summary = MembershipSummary::from_record(&record);
        assert!(summary.status.is_none());
        assert_eq!(summary.status_text(), "");
        assert_eq!(summary.render()[1].text_content(), "Status");
    }

    #[test]
    fn test_billing_line_for_storefront() {
        let record = create_test_record(|r| r.billing_provider = BillingProvider::Apple);
        assert_eq!(
            MembershipSummary::from_record(&record).billing,
            "Billed through Apple"
        );
    }

    #[test]
    fn test_billing_line_for_direct() {
        let record = create_test_record(|r| {
            r.billing_provider = BillingProvider::Direct;
            r.payment = "Visa •••• 4242".into();
        });
        assert_eq!(MembershipSummary::from_record(&record).billing, "Visa •••• 4242");
    }

    #[test]
    fn test_billing_line_for_unrecognized_provider() {
        let record = create_test_record(|r| {
            r.billing_provider = BillingProvider::Unrecognized("roku".into())
        });
        assert_eq!(
            MembershipSummary::from_record(&record).billing,
            "Billed through Roku"
        );
    }

    #[test]
    fn test_malformed_date_is_shown_verbatim() {
        let record = create_test_record(|r| r.renewal_date_iso = "soon".into());
        assert_eq!(
            MembershipSummary::from_record(&record).status_text(),
            "Renews on soon"
        );
    }

    #[test]
    fn test_render_structure() {
        let record = create_test_record(|r| r.plan = "Premium <4K>".into());
        let rows = MembershipSummary::from_record(&record).render();

        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row.has_class("kv")));
        assert_eq!(rows[0].text_content(), "PlanPremium <4K>");
        assert_eq!(
            rows[1].to_html(),
            "<div class=\"kv\"><div class=\"k\">Status</div><div class=\"v\">Renews on <strong>March 18, 2026</strong></div></div>"
        );
        assert!(rows[0].to_html().contains("Premium &lt;4K&gt;"));
    }
}
