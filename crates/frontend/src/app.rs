use crate::layout::Shell;
use crate::shared::notificacao::NotificacaoService;
use crate::system::auth::context::provide_auth;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Sessão do usuário logado (consumida do storage do navegador)
    provide_auth();

    // Serviço de notificações transitórias, disponível para toda a árvore
    provide_context(NotificacaoService::new());

    view! {
        <Shell />
    }
}
