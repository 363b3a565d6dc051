use contracts::system::auth::Role;
use leptos::prelude::*;
use thaw::*;

use crate::system::session::use_session;

/// Role picker shown while no role is stored.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Gestión de Ventas"</h1>
                <h2>"Seleccione su perfil"</h2>

                <Flex gap=FlexGap::Small>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| session.login(Role::Administrador)
                    >
                        {Role::Administrador.label()}
                    </Button>
                    <Button on_click=move |_| session.login(Role::Vendedor)>
                        {Role::Vendedor.label()}
                    </Button>
                </Flex>
            </div>
        </div>
    }
}
