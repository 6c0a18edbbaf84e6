use crate::system::auth::context::use_auth;
use leptos::prelude::*;

/// Menu lateral. Somente "Indicadores" é atendido por esta aplicação; os
/// demais itens levam às outras seções do produto.
#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = use_auth();
    let nome = move || {
        auth.usuario
            .get()
            .map(|u| u.nome)
            .unwrap_or_else(|| "Visitante".to_string())
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">"Painel de Gestão"</div>
            <nav class="sidebar__nav">
                <a class="sidebar__item" href="/documentos">"Documentos"</a>
                <a class="sidebar__item" href="/conteudos">"Conteúdos"</a>
                <a class="sidebar__item sidebar__item--active" href="/indicadores">
                    "Indicadores"
                </a>
                <a class="sidebar__item" href="/atividades">"Atividades"</a>
            </nav>
            <div class="sidebar__user">{nome}</div>
        </aside>
    }
}
