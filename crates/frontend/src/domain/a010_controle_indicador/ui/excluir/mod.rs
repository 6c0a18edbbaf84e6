use crate::domain::a010_controle_indicador::ui::model::{self, Lookups};
use crate::shared::notificacao::NotificacaoService;
use contracts::domain::a010_controle_indicador::ControleIndicador;
use leptos::prelude::*;

/// Diálogo de confirmação de exclusão.
///
/// A remoção das linhas Meta/Realizado derivadas acontece em cascata no
/// banco; o número exibido é uma estimativa calculada aqui e nunca é
/// conferido com o total realmente removido.
#[component]
#[allow(non_snake_case)]
pub fn ExcluirDialog(
    controle: ControleIndicador,
    lookups: RwSignal<Lookups>,
    on_close: Callback<()>,
    on_success: Callback<()>,
) -> impl IntoView {
    let notificacoes =
        use_context::<NotificacaoService>().expect("NotificacaoService not found in context");

    let id = controle.id.value();
    let linhas_afetadas = controle.linhas_previstas();
    let indicador = controle.indicador.clone();
    let projeto = lookups.get_untracked().nome_projeto(&controle.projeto_id);
    let categoria = lookups
        .get_untracked()
        .nome_categoria(&controle.categoria_id);
    let observacao = controle.observacao.clone();

    let (excluindo, set_excluindo) = signal(false);

    let confirmar = move |_| {
        if excluindo.get() {
            return;
        }
        set_excluindo.set(true);
        leptos::task::spawn_local(async move {
            match model::delete(id).await {
                Ok(()) => {
                    notificacoes.sucesso(format!(
                        "Indicador excluído com sucesso! Aproximadamente {} linhas relacionadas também foram removidas automaticamente.",
                        linhas_afetadas
                    ));
                    on_success.run(());
                }
                Err(e) => {
                    log::error!("Erro ao excluir indicador: {e}");
                    notificacoes.erro(e);
                }
            }
            set_excluindo.set(false);
        });
    };

    view! {
        <div class="modal-overlay">
            <div class="modal modal--compacta">
                <div class="modal__header">
                    <h2 class="modal__title">"Confirmar Exclusão"</h2>
                    <button
                        class="modal__fechar"
                        disabled=move || excluindo.get()
                        on:click=move |_| on_close.run(())
                    >
                        "×"
                    </button>
                </div>

                <div class="modal__body">
                    <div class="info-box">
                        <h3 class="info-box__titulo">{indicador}</h3>
                        <p><strong>"Projeto: "</strong>{projeto}</p>
                        <p><strong>"Categoria: "</strong>{categoria}</p>
                        {observacao.map(|obs| view! {
                            <p><strong>"Observação: "</strong>{obs}</p>
                        })}
                    </div>

                    <div class="warning-box warning-box--perigo">
                        <h4 class="warning-box__titulo">"Atenção: Esta ação não pode ser desfeita!"</h4>
                        <p class="warning-box__text">
                            "Ao excluir este indicador, todas as linhas de indicador relacionadas a esta linha base também serão excluídas automaticamente."
                        </p>
                        <p class="warning-box__text">
                            <strong>"Estimativa de linhas afetadas: "</strong>
                            {format!("aproximadamente {} linhas (baseado na configuração de recorrência).", linhas_afetadas)}
                        </p>
                        <p class="warning-box__text">
                            "O banco de dados removerá automaticamente todas as linhas relacionadas."
                        </p>
                    </div>

                    <p class="modal__pergunta">
                        "Você tem certeza que deseja excluir este indicador e todas as suas linhas relacionadas?"
                    </p>
                </div>

                <div class="modal__footer">
                    <button
                        class="button button--secondary"
                        disabled=move || excluindo.get()
                        on:click=move |_| on_close.run(())
                    >
                        "Cancelar"
                    </button>
                    <button
                        class="button button--perigo"
                        disabled=move || excluindo.get()
                        on:click=confirmar
                    >
                        {move || if excluindo.get() { "Excluindo..." } else { "Sim, Excluir" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
