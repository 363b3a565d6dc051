use crate::domain::a001_seller::ui::list::SellerList;
use crate::domain::a001_seller::ui::lookup::SellerLookup;
use crate::domain::a002_branch::ui::list::BranchList;
use crate::domain::a003_sale::ui::list::SaleList;
use crate::domain::a003_sale::ui::registration::SaleRegistration;
use crate::domain::a004_quotation::ui::list::QuotationList;
use crate::domain::a005_coupon::ui::list::CouponList;
use crate::layout::global_context::{AppGlobalContext, PageKey};
use crate::layout::sidebar::Sidebar;
use crate::layout::Shell;
use crate::projections::p900_sales_by_channel::ui::list::SalesByChannelList;
use crate::system::pages::login::LoginPage;
use crate::system::session::use_session;
use contracts::system::auth::Role;
use leptos::prelude::*;

fn render_page(page: PageKey) -> AnyView {
    match page {
        PageKey::Sales => view! { <SaleList /> }.into_any(),
        PageKey::SaleRegistration => view! { <SaleRegistration /> }.into_any(),
        PageKey::Quotations => view! { <QuotationList /> }.into_any(),
        PageKey::Sellers => view! { <SellerList /> }.into_any(),
        PageKey::SellerLookup => view! { <SellerLookup /> }.into_any(),
        PageKey::Branches => view! { <BranchList /> }.into_any(),
        PageKey::Coupons => view! { <CouponList /> }.into_any(),
        PageKey::SalesByChannel => view! { <SalesByChannelList /> }.into_any(),
    }
}

#[component]
fn MainLayout(role: Role) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // Restores `?active=` once, then keeps the URL in sync.
    ctx.init_router_integration(role);

    let center = move || {
        let page = ctx.active.get();
        if page.allowed_for(role) {
            render_page(page)
        } else {
            log::warn!("{} may not open {}", role, page.key());
            render_page(PageKey::home_for(role))
        }
    };

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || center.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let session = use_session();

    view! {
        {move || match session.role() {
            Some(role) => view! { <MainLayout role=role /> }.into_any(),
            None => view! { <LoginPage /> }.into_any(),
        }}
    }
}
