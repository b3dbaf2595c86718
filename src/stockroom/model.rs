/// One inventory entry.
///
/// `id == 0` means the item has not been assigned an id by a store yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub supplier: String,
    pub quantity: i64,
    pub price: f64,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        supplier: impl Into<String>,
        quantity: i64,
        price: f64,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            category: category.into(),
            supplier: supplier.into(),
            quantity,
            price,
        }
    }

    /// Everything but the id, as accepted by `Inventory::update`.
    pub fn fields(&self) -> ItemFields {
        ItemFields {
            name: self.name.clone(),
            category: self.category.clone(),
            supplier: self.supplier.clone(),
            quantity: self.quantity,
            price: self.price,
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.id != 0
    }
}

/// The replaceable part of an item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFields {
    pub name: String,
    pub category: String,
    pub supplier: String,
    pub quantity: i64,
    pub price: f64,
}

impl ItemFields {
    pub fn apply_to(self, item: &mut Item) {
        item.name = self.name;
        item.category = self.category;
        item.supplier = self.supplier;
        item.quantity = self.quantity;
        item.price = self.price;
    }
}

impl From<ItemFields> for Item {
    fn from(fields: ItemFields) -> Self {
        let mut item = Item::default();
        fields.apply_to(&mut item);
        item
    }
}
