use crate::domain::a010_controle_indicador::ui::list::ControleIndicadorList;
use crate::usecases::u101_importar_planilha::view::ImportarPlanilhaView;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Aba {
    Tabela,
    Importacao,
}

/// Página central de indicadores: a visão de tabela e a de importação operam
/// sobre o mesmo conjunto de registros.
#[component]
pub fn ControleIndicadoresPage() -> impl IntoView {
    let (aba, set_aba) = signal(Aba::Tabela);

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Controle de Indicadores"</h1>
                </div>
            </div>

            <div class="tabs">
                <button
                    class="tabs__button"
                    class:tabs__button--active=move || aba.get() == Aba::Tabela
                    on:click=move |_| set_aba.set(Aba::Tabela)
                >
                    "Tabela"
                </button>
                <button
                    class="tabs__button"
                    class:tabs__button--active=move || aba.get() == Aba::Importacao
                    on:click=move |_| set_aba.set(Aba::Importacao)
                >
                    "Importação"
                </button>
            </div>

            {move || match aba.get() {
                Aba::Tabela => view! { <ControleIndicadorList /> }.into_any(),
                Aba::Importacao => view! { <ImportarPlanilhaView /> }.into_any(),
            }}
        </div>
    }
}
