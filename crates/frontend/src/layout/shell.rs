use crate::domain::a010_controle_indicador::ui::page::ControleIndicadoresPage;
use crate::layout::sidebar::Sidebar;
use crate::shared::notificacao::Notificacoes;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

/// Estrutura fixa da aplicação: menu lateral + área central.
/// As demais seções do menu pertencem a outros módulos do produto; este
/// repositório entrega a seção de controle de indicadores.
#[component]
pub fn Shell() -> impl IntoView {
    let auth = use_auth();

    view! {
        <div class="shell">
            <Sidebar />
            <main class="shell__main">
                <Notificacoes />
                <Show
                    when=move || auth.usuario.get().is_some()
                    fallback=|| view! {
                        <div class="warning-box">
                            <span class="warning-box__icon">"⚠"</span>
                            <span class="warning-box__text">
                                "Você precisa estar logado para esta ação"
                            </span>
                        </div>
                    }
                >
                    <ControleIndicadoresPage />
                </Show>
            </main>
        </div>
    }
}
