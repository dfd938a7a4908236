#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct OrderId(pub(crate) String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingMode {
    // Movements are recorded against individual sub-orders.
    PerTask,
    // Movements are recorded against the order as a whole and must be
    // prorated across sub-orders.
    Global,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub order_number: String,
    pub client: String,
    // Budget ceiling for the whole engagement.
    pub quoted_amount: f64,
    // Permanent once set, or once any movement exists for the order.
    pub billing_mode: Option<BillingMode>,
    pub director: String,
    pub executive: String,
    pub observations: Option<String>,
}

// Shorthand constructors.

pub fn order_id(id: impl Into<String>) -> OrderId {
    OrderId(id.into())
}

// --

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
