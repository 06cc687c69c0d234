use crate::domain::entities::record::{EnumField, FieldDef, FieldKind, FieldValue, Record, Schema};
use crate::domain::query::criteria::SortDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentStatus {
    Pending,
    Processing,
    Paid,
    Failed,
}

impl EnumField for PaymentStatus {
    const ALL: &'static [Self] = &[
        PaymentStatus::Pending,
        PaymentStatus::Processing,
        PaymentStatus::Paid,
        PaymentStatus::Failed,
    ];

    fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Processing => "processing",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Failed => "failed",
        }
    }

    fn label(self) -> &'static str {
        match self {
            PaymentStatus::Pending => "En attente",
            PaymentStatus::Processing => "En cours",
            PaymentStatus::Paid => "Payé",
            PaymentStatus::Failed => "Échoué",
        }
    }
}

/// Amount owed to a practitioner for submitted reports.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: String,
    pub doctor_id: String,
    pub doctor_name: String,
    pub reports: u32,
    pub amount: f64,
    pub date: String,
    pub status: PaymentStatus,
    pub report_ids: Vec<String>,
}

impl Payment {
    pub const SCHEMA: Schema = Schema {
        fields: &[
            FieldDef::sortable("id", FieldKind::Text),
            FieldDef::filter_only("doctor_id", FieldKind::Text),
            FieldDef::sortable("doctor_name", FieldKind::Text),
            FieldDef::sortable("reports", FieldKind::Number),
            FieldDef::sortable("amount", FieldKind::Number),
            FieldDef::sortable("date", FieldKind::Date),
            FieldDef::sortable("status", FieldKind::Enum),
            FieldDef::filter_only("report_ids", FieldKind::TextList),
        ],
        search_fields: &["doctor_name", "id"],
        enum_filters: &["status"],
        date_filter: Some("date"),
        default_sort: Some(("date", SortDirection::Desc)),
    };

    pub fn can_initiate(&self) -> bool {
        self.status == PaymentStatus::Pending
    }

    /// Question asked before the payment is sent to the gateway.
    pub fn confirmation_prompt(&self) -> String {
        format!(
            "En confirmant, vous autorisez le paiement de {}€ à {} pour {} rapports médicaux.",
            self.amount, self.doctor_name, self.reports
        )
    }
}

impl Record for Payment {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "id" => FieldValue::Text(&self.id),
            "doctor_id" => FieldValue::Text(&self.doctor_id),
            "doctor_name" => FieldValue::Text(&self.doctor_name),
            "reports" => FieldValue::number(self.reports),
            "amount" => FieldValue::Number(self.amount),
            "date" => FieldValue::date(&self.date),
            "status" => FieldValue::Enum(self.status.as_str()),
            "report_ids" => FieldValue::list(&self.report_ids),
            _ => FieldValue::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::infra::mock::catalog::mock_payments;

    #[test]
    fn confirmation_prompt_names_amount_doctor_and_reports() {
        let payments = mock_payments();

        assert_eq!(
            payments[0].confirmation_prompt(),
            "En confirmant, vous autorisez le paiement de 1200€ à Dr. Sarah Chen pour 8 rapports médicaux."
        );
    }
}
