use crate::entities::{FinancialMovement, LatestInvoice, LatestPayment, OrderTotals};

/// Rolls an order's movements up to display-level totals: amounts invoiced
/// and paid, plus the most recent invoice and payment by their respective
/// dates. Movements without a date never qualify as "most recent"; on equal
/// dates the later-inserted movement wins.
pub fn aggregate(movements: &[&FinancialMovement]) -> OrderTotals {
    movements
        .iter()
        .fold(OrderTotals::default(), |totals, movement| {
            step(totals, movement)
        })
}

fn step(totals: OrderTotals, movement: &FinancialMovement) -> OrderTotals {
    let mut t = totals;

    if let Some(amount) = movement.invoice_amount {
        t.total_invoiced += amount;
    }
    if let Some(amount) = movement.paid_amount {
        t.total_paid += amount;
    }

    if let Some(date) = movement.invoice_date {
        let supersedes = t.latest_invoice.as_ref().map_or(true, |li| date >= li.date);
        if supersedes {
            t.latest_invoice = Some(LatestInvoice {
                movement_id: movement.id.clone(),
                number: movement.invoice_number.clone(),
                date,
                amount: movement.invoice_amount,
            });
        }
    }
    if let Some(date) = movement.payment_date {
        let supersedes = t.latest_payment.as_ref().map_or(true, |lp| date >= lp.date);
        if supersedes {
            t.latest_payment = Some(LatestPayment {
                movement_id: movement.id.clone(),
                date,
                amount: movement.paid_amount,
            });
        }
    }

    t
}
