use std::sync::Arc;

#[derive(minicbor::Encode, minicbor::Decode, Debug, Default, Clone, PartialEq, Eq)]
pub struct Order {
    #[n(0)]
    pub increment_id: String,
    #[n(1)]
    pub quote_id: String, // the quote this order was placed from
    #[n(2)]
    pub store_code: String,
    #[n(3)]
    pub delivery_comment: Option<String>,
    #[n(4)]
    delivery_instructions: Option<String>,
    #[n(5)]
    delivery_date: Option<String>,
}

impl Order {
    pub fn new(increment_id: impl Into<String>, quote_id: impl Into<String>) -> Self {
        Self {
            increment_id: increment_id.into(),
            quote_id: quote_id.into(),
            store_code: "default".into(),
            ..Self::default()
        }
    }
    pub fn set_store_code(mut self, store_code: impl Into<String>) -> Self {
        self.store_code = store_code.into();
        self
    }
    pub fn set_delivery_comment(mut self, comment: impl Into<String>) -> Self {
        self.delivery_comment = Some(comment.into());
        self
    }
    pub fn delivery_instructions(&self) -> Option<&str> {
        self.delivery_instructions.as_deref()
    }
    pub fn delivery_date(&self) -> Option<&str> {
        self.delivery_date.as_deref()
    }
    /// Free text the warehouse reads: the customer comment, else the copied instructions
    pub fn instructions_text(&self) -> Option<&str> {
        self.delivery_comment
            .as_deref()
            .or(self.delivery_instructions.as_deref())
    }
    // only the enricher writes these, after validation has passed
    pub(crate) fn write_delivery_instructions(&mut self, instructions: Option<String>) {
        self.delivery_instructions = instructions;
    }
    pub(crate) fn write_delivery_date(&mut self, date: Option<String>) {
        self.delivery_date = date;
    }
}

/// Placed orders encoded as cbor in the `orders` tree
pub struct SledOrderRepository {
    tree: sled::Tree,
}

impl SledOrderRepository {
    pub const TREE: &'static str = "orders";

    pub fn open(instance: &Arc<sled::Db>) -> anyhow::Result<Self> {
        Ok(Self {
            tree: instance.open_tree(Self::TREE)?,
        })
    }
    pub fn save(&self, order: &Order) -> anyhow::Result<()> {
        self.tree
            .insert(order.increment_id.as_bytes(), minicbor::to_vec(order)?)?;
        Ok(())
    }
    pub fn load(&self, increment_id: &str) -> anyhow::Result<Order> {
        let bytes = self
            .tree
            .get(increment_id.as_bytes())?
            .ok_or_else(|| anyhow::anyhow!("Order {} has not been saved", increment_id))?;

        Ok(minicbor::decode(&bytes)?)
    }
}
