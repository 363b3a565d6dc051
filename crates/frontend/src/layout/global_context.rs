use contracts::domain::a003_sale::Sale;
use contracts::system::auth::Role;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Top-level pages of the admin front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKey {
    Sales,
    SaleRegistration,
    Quotations,
    Sellers,
    SellerLookup,
    Branches,
    Coupons,
    SalesByChannel,
}

impl PageKey {
    pub const ALL: [PageKey; 8] = [
        PageKey::Sales,
        PageKey::SaleRegistration,
        PageKey::Quotations,
        PageKey::Sellers,
        PageKey::SellerLookup,
        PageKey::Branches,
        PageKey::Coupons,
        PageKey::SalesByChannel,
    ];

    /// Value of the `?active=` query parameter.
    pub fn key(&self) -> &'static str {
        match self {
            PageKey::Sales => "a003_sale",
            PageKey::SaleRegistration => "a003_sale_registration",
            PageKey::Quotations => "a004_quotation",
            PageKey::Sellers => "a001_seller",
            PageKey::SellerLookup => "a001_seller_lookup",
            PageKey::Branches => "a002_branch",
            PageKey::Coupons => "a005_coupon",
            PageKey::SalesByChannel => "p900_sales_by_channel",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }

    pub fn title(&self) -> &'static str {
        match self {
            PageKey::Sales => "Ventas",
            PageKey::SaleRegistration => "Registrar venta",
            PageKey::Quotations => "Cotizaciones",
            PageKey::Sellers => "Vendedores",
            PageKey::SellerLookup => "Buscar vendedor",
            PageKey::Branches => "Sedes",
            PageKey::Coupons => "Cupones",
            PageKey::SalesByChannel => "Ventas por canal",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            PageKey::Sales | PageKey::SaleRegistration => "cash",
            PageKey::Quotations => "file-text",
            PageKey::Sellers | PageKey::SellerLookup => "users",
            PageKey::Branches => "building",
            PageKey::Coupons => "tag",
            PageKey::SalesByChannel => "bar-chart",
        }
    }

    /// Sellers work sales and quotations; the administrator sees everything.
    pub fn allowed_for(&self, role: Role) -> bool {
        match self {
            PageKey::Sales | PageKey::SaleRegistration | PageKey::Quotations => true,
            PageKey::Sellers
            | PageKey::SellerLookup
            | PageKey::Branches
            | PageKey::Coupons
            | PageKey::SalesByChannel => role.is_admin(),
        }
    }

    pub fn home_for(_role: Role) -> Self {
        PageKey::Sales
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<PageKey>,
    pub left_open: RwSignal<bool>,
    /// Draft sale the registration page continues; `None` starts a new one.
    pub sale_draft: RwSignal<Option<Sale>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(PageKey::Sales),
            left_open: RwSignal::new(true),
            sale_draft: RwSignal::new(None),
        }
    }

    pub fn open(&self, page: PageKey) {
        self.navigate(page, None);
    }

    /// Registration page pre-loaded with an existing draft.
    pub fn open_sale_draft(&self, sale: Sale) {
        self.navigate(PageKey::SaleRegistration, Some(sale));
    }

    fn navigate(&self, page: PageKey, sale_draft: Option<Sale>) {
        self.sale_draft.set(sale_draft);
        if self.active.get_untracked() != page {
            log::debug!("open page {}", page.key());
            self.active.set(page);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|v| *v = !*v);
    }

    /// Restore the active page from `?active=` and keep the URL in sync.
    pub fn init_router_integration(&self, role: Role) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();

        let restored = params
            .get("active")
            .and_then(|k| PageKey::from_key(k))
            .filter(|p| p.allowed_for(role))
            .unwrap_or_else(|| PageKey::home_for(role));
        self.active.set(restored);

        let this = *self;
        Effect::new(move |_| {
            let active_key = this.active.get().key();
            let query_string = serde_qs::to_string(&HashMap::from([(
                "active".to_string(),
                active_key.to_string(),
            )]))
            .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_sale::{SaleOrigin, SaleStatus};

    fn draft_sale() -> Sale {
        Sale {
            id: 7,
            num_venta: "VENTA-007".into(),
            origen_venta: SaleOrigin::Direct,
            estado: SaleStatus::Draft,
            fecha_venta_creada: "2025-03-10T14:22:00Z".into(),
            nombre_cliente: "Juan Pérez".into(),
        }
    }

    #[test]
    fn test_editing_a_draft_carries_it_to_registration() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppGlobalContext::new();
            ctx.open_sale_draft(draft_sale());
            assert_eq!(ctx.active.get_untracked(), PageKey::SaleRegistration);
            assert_eq!(ctx.sale_draft.with_untracked(|s| s.as_ref().map(|s| s.id)), Some(7));

            ctx.open(PageKey::Sales);
            ctx.open(PageKey::SaleRegistration);
            assert!(ctx.sale_draft.with_untracked(Option::is_none));
        });
    }

    #[test]
    fn test_page_keys_round_trip() {
        for page in PageKey::ALL {
            assert_eq!(PageKey::from_key(page.key()), Some(page));
        }
        assert_eq!(PageKey::from_key("a999_unknown"), None);
    }

    #[test]
    fn test_seller_role_sees_only_sales_pages() {
        let visible: Vec<_> = PageKey::ALL
            .into_iter()
            .filter(|p| p.allowed_for(Role::Vendedor))
            .collect();
        assert_eq!(
            visible,
            vec![PageKey::Sales, PageKey::SaleRegistration, PageKey::Quotations]
        );
        assert!(PageKey::ALL.iter().all(|p| p.allowed_for(Role::Administrador)));
    }
}
