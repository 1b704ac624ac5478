use super::actions::{MenuAction, MenuActionResult};
use super::error::MenuError;
use crate::actor_framework::Entity;
use crate::domain::{Menu, MenuCreate, MenuPatch};

impl Entity for Menu {
    type Id = String;
    type CreateParams = MenuCreate;
    type Patch = MenuPatch;
    type Action = MenuAction;
    type ActionResult = MenuActionResult;
    type Error = MenuError;

    fn id(&self) -> &String {
        &self.id
    }

    fn not_found(id: &String) -> MenuError {
        MenuError::NotFound(id.clone())
    }

    fn from_create_params(id: String, params: MenuCreate) -> Result<Self, MenuError> {
        if params.price < 0.0 {
            return Err(MenuError::InvalidPrice(params.price));
        }
        if params.max_order == 0 {
            return Err(MenuError::InvalidMaxOrder);
        }
        Ok(Self {
            id,
            name: params.name,
            price: params.price,
            image_url: params.image_url,
            in_stock: params.in_stock,
            max_order: params.max_order,
            stock: params.stock,
            store_id: params.store_id,
        })
    }

    /// Applies an administrative edit. This is the only path through
    /// which stock may increase.
    fn on_update(&mut self, patch: MenuPatch) -> Result<(), MenuError> {
        if let Some(price) = patch.price {
            if price < 0.0 {
                return Err(MenuError::InvalidPrice(price));
            }
            self.price = price;
        }
        if let Some(max_order) = patch.max_order {
            if max_order == 0 {
                return Err(MenuError::InvalidMaxOrder);
            }
            self.max_order = max_order;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = Some(image_url);
        }
        if let Some(in_stock) = patch.in_stock {
            self.in_stock = in_stock;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        Ok(())
    }

    fn handle_action(&mut self, action: MenuAction) -> Result<MenuActionResult, MenuError> {
        match action {
            MenuAction::CheckStock => Ok(MenuActionResult::StockLevel(self.stock)),
            MenuAction::Reserve(amount) => {
                if !self.in_stock {
                    return Err(MenuError::Unavailable(self.name.clone()));
                }
                if amount > self.stock {
                    return Err(MenuError::InsufficientStock {
                        requested: amount,
                        available: self.stock,
                    });
                }
                self.stock -= amount;
                Ok(MenuActionResult::Reserved)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_menu(stock: u32, in_stock: bool) -> Menu {
        Menu::from_create_params(
            "menu_1".to_string(),
            MenuCreate::new("Nasi Goreng", 15_000.0, "store_1")
                .with_stock(stock)
                .with_in_stock(in_stock),
        )
        .unwrap()
    }

    #[test]
    fn reserve_decrements_stock() {
        let mut menu = sample_menu(10, true);
        menu.handle_action(MenuAction::Reserve(4)).unwrap();
        assert_eq!(menu.stock, 6);
        menu.handle_action(MenuAction::Reserve(6)).unwrap();
        assert_eq!(menu.stock, 0);
    }

    #[test]
    fn reserve_rejects_beyond_stock_and_leaves_stock_untouched() {
        let mut menu = sample_menu(5, true);
        let err = menu.handle_action(MenuAction::Reserve(8)).unwrap_err();
        assert_eq!(err, MenuError::InsufficientStock { requested: 8, available: 5 });
        assert_eq!(menu.stock, 5);
    }

    #[test]
    fn reserve_rejects_unavailable_menu_before_stock_check() {
        let mut menu = sample_menu(5, false);
        let err = menu.handle_action(MenuAction::Reserve(1)).unwrap_err();
        assert!(matches!(err, MenuError::Unavailable(_)));
        assert_eq!(menu.stock, 5);
    }

    #[test]
    fn create_validates_price_and_cap() {
        let err = Menu::from_create_params(
            "menu_1".to_string(),
            MenuCreate::new("Sate", -1.0, "store_1"),
        )
        .unwrap_err();
        assert_eq!(err, MenuError::InvalidPrice(-1.0));

        let err = Menu::from_create_params(
            "menu_1".to_string(),
            MenuCreate::new("Sate", 1.0, "store_1").with_max_order(0),
        )
        .unwrap_err();
        assert_eq!(err, MenuError::InvalidMaxOrder);
    }

    #[test]
    fn update_can_restock_and_validates_fields() {
        let mut menu = sample_menu(0, true);
        menu.on_update(MenuPatch { stock: Some(25), ..Default::default() }).unwrap();
        assert_eq!(menu.stock, 25);

        let err =
            menu.on_update(MenuPatch { price: Some(-2.0), ..Default::default() }).unwrap_err();
        assert_eq!(err, MenuError::InvalidPrice(-2.0));
    }
}
