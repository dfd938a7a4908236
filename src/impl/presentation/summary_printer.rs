use iso_currency::Currency;

use crate::{
    domain::logic::reconcile::effective_budget,
    entities::{DerivedLedger, LedgerSnapshot, Order, SubOrder},
};

use super::utils::format_amount;

pub(crate) struct SummaryPrinter {
    currency: Currency,
}

impl SummaryPrinter {
    pub(crate) fn new(currency: Currency) -> Self {
        Self { currency }
    }

    pub(crate) fn print_summary(
        &self,
        snapshot: &LedgerSnapshot,
        derived: &DerivedLedger,
    ) -> String {
        let mut summary_output = String::new();

        summary_output.push_str(
            "; --- Orders -------------------------------------------------------------------\n\n",
        );
        self.print_orders(&mut summary_output, snapshot, derived);

        if !derived.warnings.is_empty() {
            summary_output.push_str(
                "; --- Warnings -----------------------------------------------------------------\n\n",
            );
            self.print_warnings(&mut summary_output, derived);
        }

        summary_output
    }

    fn print_orders(
        &self,
        summary_output: &mut String,
        snapshot: &LedgerSnapshot,
        derived: &DerivedLedger,
    ) {
        let sorted_orders = {
            let mut v: Vec<&Order> = snapshot.orders.iter().collect();
            v.sort_by(|a, b| a.order_number.cmp(&b.order_number));
            v
        };
        for order in sorted_orders {
            let sorted_sub_orders = {
                let mut v: Vec<&SubOrder> = snapshot
                    .sub_orders
                    .iter()
                    .filter(|s| s.order_id == order.id)
                    .collect();
                v.sort_by_key(|s| s.sequence);
                v
            };
            self.print_order(summary_output, order, &sorted_sub_orders, derived);
        }
    }

    fn print_order(
        &self,
        summary_output: &mut String,
        order: &Order,
        sub_orders: &[&SubOrder],
        derived: &DerivedLedger,
    ) {
        let attribution = derived
            .attributions
            .get(&order.id)
            .cloned()
            .unwrap_or_default();
        let totals = derived.totals.get(&order.id).cloned().unwrap_or_default();

        summary_output.push_str(&format!(
            "{} {} ({})\n",
            order.order_number,
            order.client,
            order.billing_mode.map_or("billing mode unset", |m| m.label()),
        ));
        summary_output.push_str(&format!(
            "    managed by {} / {}\n",
            order.director, order.executive
        ));
        summary_output.push_str(&format!(
            "    {:44} {:>18}\n",
            "quoted",
            format_amount(order.quoted_amount, self.currency)
        ));
        summary_output.push_str(&format!(
            "    {:44} {:>18}\n",
            "invoiced",
            format_amount(totals.total_invoiced, self.currency)
        ));
        summary_output.push_str(&format!(
            "    {:44} {:>18}\n",
            "collected",
            format_amount(totals.total_paid, self.currency)
        ));
        if let Some(invoice) = &totals.latest_invoice {
            summary_output.push_str(&format!(
                "    last invoice {} on {}\n",
                invoice.number.as_deref().unwrap_or("(no number)"),
                invoice.date,
            ));
        }
        if let Some(payment) = &totals.latest_payment {
            summary_output.push_str(&format!("    last payment on {}\n", payment.date));
        }

        for sub_order in sub_orders {
            let status = derived.status_of(&sub_order.id).unwrap_or(sub_order.status);
            let budget = effective_budget(order, sub_orders.len(), sub_order)
                .map_or("-".to_string(), |b| format_amount(b, self.currency));
            summary_output.push_str(&format!(
                "    {:>3}. {:20} [{}]  budget {:>14}  invoiced {:>14}  paid {:>14}\n",
                sub_order.sequence,
                sub_order.unit,
                status.tag(),
                budget,
                format_amount(attribution.invoiced_for(&sub_order.id), self.currency),
                format_amount(attribution.paid_for(&sub_order.id), self.currency),
            ));
        }

        if attribution.residual_invoiced != 0.0 || attribution.residual_paid != 0.0 {
            summary_output.push_str(&format!(
                "    residual: invoiced {} / paid {}\n",
                format_amount(attribution.residual_invoiced, self.currency),
                format_amount(attribution.residual_paid, self.currency),
            ));
        }
        if let Some(observations) = &order.observations {
            for line in textwrap::wrap(observations, 74) {
                summary_output.push_str(&format!("    ; {}\n", line));
            }
        }
        summary_output.push('\n');
    }

    fn print_warnings(&self, summary_output: &mut String, derived: &DerivedLedger) {
        for warning in &derived.warnings {
            let s = warning.to_string();
            for line in textwrap::wrap(&s, 74) {
                summary_output.push_str(&format!("; {}\n", line));
            }
        }
    }
}
