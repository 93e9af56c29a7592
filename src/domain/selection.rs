use super::product::Product;

/// Quantity floor. Decrementing below this clamps instead of underflowing.
const MIN_QUANTITY: u32 = 1;

/// Next quantity after one increment. No upper bound is enforced.
pub fn increment(quantity: u32) -> u32 {
    quantity + 1
}

/// Next quantity after one decrement, clamped at the floor.
pub fn decrement(quantity: u32) -> u32 {
    if quantity > MIN_QUANTITY {
        quantity - 1
    } else {
        MIN_QUANTITY
    }
}

/// View-local state: which product is shown, at what quantity.
///
/// Created fresh on every route change; the quantity starts at the floor and
/// never drops below it.
#[derive(Debug, Clone)]
pub struct Selection {
    product: Option<Product>,
    quantity: u32,
}

impl Selection {
    pub fn new() -> Self {
        Self {
            product: None,
            quantity: MIN_QUANTITY,
        }
    }

    pub fn resolve(&mut self, product: Product) {
        self.product = Some(product);
    }

    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn increment(&mut self) -> u32 {
        self.quantity = increment(self.quantity);
        self.quantity
    }

    pub fn decrement(&mut self) -> u32 {
        self.quantity = decrement(self.quantity);
        self.quantity
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}

/// What the detail view renders after a route change.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// Lookup missed; a hard redirect to the home path has been emitted.
    Redirecting,
    /// Product resolved and rendering.
    Showing { product: Product, quantity: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_selection_is_unresolved_at_quantity_one() {
        let selection = Selection::new();

        assert!(selection.product().is_none());
        assert_eq!(selection.quantity(), 1);
    }

    #[test]
    fn decrement_never_drops_below_one() {
        for q in 1..=10 {
            assert!(decrement(q) >= 1);
        }
        assert_eq!(decrement(1), 1);
    }

    #[test]
    fn increment_undoes_decrement_above_the_floor() {
        for q in 2..=10 {
            assert_eq!(increment(decrement(q)), q);
        }
        // At the floor the decrement was a no-op, so the round trip lands on 2.
        assert_eq!(increment(decrement(1)), 2);
    }

    #[test]
    fn repeated_decrement_holds_at_the_floor() {
        let mut selection = Selection::new();
        for _ in 0..3 {
            assert_eq!(selection.decrement(), 1);
        }
    }

    #[test]
    fn increment_has_no_upper_clamp_in_range() {
        let mut selection = Selection::new();
        for expected in 2..=100 {
            assert_eq!(selection.increment(), expected);
        }
    }
}
