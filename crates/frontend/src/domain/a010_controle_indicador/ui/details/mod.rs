use crate::domain::a010_controle_indicador::ui::model::{self, Lookups};
use crate::shared::date_utils::{format_date, format_date_opt};
use crate::shared::notificacao::NotificacaoService;
use contracts::domain::a010_controle_indicador::{
    AtualizacaoControleIndicador, ControleIndicador,
};
use leptos::prelude::*;
use uuid::Uuid;

/// Diálogo de edição individual de uma linha base.
///
/// Prazo inicial, recorrência, tempo e repetições aparecem somente como
/// contexto: já alimentaram a geração de linhas e não são enviados no
/// payload de atualização. A subcategoria é limpa por este caminho de edição.
#[component]
#[allow(non_snake_case)]
pub fn EditarLinhaDialog(
    controle: ControleIndicador,
    lookups: RwSignal<Lookups>,
    on_close: Callback<()>,
    on_success: Callback<()>,
) -> impl IntoView {
    let notificacoes =
        use_context::<NotificacaoService>().expect("NotificacaoService not found in context");

    let id = controle.id.value();
    let form = RwSignal::new(AtualizacaoControleIndicador {
        projeto_id: Some(controle.projeto_id),
        categoria_id: Some(controle.categoria_id),
        indicador: controle.indicador.clone(),
        observacao: controle.observacao.clone(),
        descricao_detalhada: controle.descricao_detalhada.clone(),
        descricao_resumida: controle.descricao_resumida.clone(),
        tipo_unidade_id: controle.tipo_unidade_id,
        tipo_apresentacao_id: controle.tipo_apresentacao_id,
        obrigatorio: controle.obrigatorio,
    });
    let (salvando, set_salvando) = signal(false);

    // Contexto somente leitura
    let info_projeto = lookups.get_untracked().nome_projeto(&controle.projeto_id);
    let info_categoria = lookups
        .get_untracked()
        .nome_categoria(&controle.categoria_id);
    let info_subcategoria = lookups
        .get_untracked()
        .nome_subcategoria(controle.subcategoria_id);
    let info_criado_em = controle
        .created_at
        .map(|d| format_date(&d.to_rfc3339()))
        .unwrap_or_else(|| "-".to_string());
    let info_prazo = format_date_opt(
        controle
            .prazo_entrega_inicial
            .map(|d| d.to_string())
            .as_deref(),
    );
    let info_recorrencia = controle.recorrencia.as_str().to_string();
    let info_tempo = controle
        .tempo_recorrencia
        .map(|t| t.to_string())
        .unwrap_or_else(|| "-".to_string());
    let info_repeticoes = controle.repeticoes.to_string();

    let salvar = move |_| {
        if salvando.get() {
            return;
        }

        let dto = form.get();
        if let Err(mensagem) = dto.validate() {
            notificacoes.erro(mensagem);
            return;
        }

        set_salvando.set(true);
        let dto = dto.normalizado();
        leptos::task::spawn_local(async move {
            match model::update(id, &dto).await {
                Ok(()) => {
                    notificacoes.sucesso("Item atualizado com sucesso!");
                    on_success.run(());
                }
                Err(e) => {
                    log::error!("Erro ao salvar alterações: {e}");
                    notificacoes.erro(e);
                }
            }
            set_salvando.set(false);
        });
    };

    view! {
        <div class="modal-overlay">
            <div class="modal modal--media">
                <div class="modal__header">
                    <h2 class="modal__title">"Editar Linha Base de Indicador"</h2>
                    <button class="modal__fechar" on:click=move |_| on_close.run(())>"×"</button>
                </div>

                <div class="modal__body">
                    <div class="info-box">
                        <h3 class="info-box__titulo">"Informações do Item"</h3>
                        <p><strong>"ID: "</strong>{id}</p>
                        <p><strong>"Projeto Atual: "</strong>{info_projeto}</p>
                        <p><strong>"Categoria Atual: "</strong>{info_categoria}</p>
                        <p><strong>"Subcategoria Atual: "</strong>{info_subcategoria}</p>
                        <p><strong>"Criado em: "</strong>{info_criado_em}</p>
                    </div>

                    <div class="info-box info-box--contexto">
                        <h4 class="info-box__titulo">"Configuração de Geração (somente leitura)"</h4>
                        <p><strong>"Prazo Inicial: "</strong>{info_prazo}</p>
                        <p><strong>"Recorrência: "</strong>{info_recorrencia}</p>
                        <p><strong>"Tempo de Recorrência: "</strong>{info_tempo}</p>
                        <p><strong>"Repetições: "</strong>{info_repeticoes}</p>
                        <p class="info-box__nota">
                            "Este indicador possui linhas automaticamente geradas na tabela de controle geral; a configuração acima não pode mais ser alterada."
                        </p>
                    </div>

                    <div class="form-grid">
                        <div class="form-group">
                            <label>"Projeto " <span class="obrigatorio">"*"</span></label>
                            <select
                                prop:value=move || form.get().projeto_id.map(|v| v.to_string()).unwrap_or_default()
                                on:change=move |ev| {
                                    let valor = event_target_value(&ev);
                                    form.update(|f| f.projeto_id = Uuid::parse_str(&valor).ok());
                                }
                            >
                                <option value="">"Selecione um projeto"</option>
                                {move || lookups.get().projetos.iter().map(|(pid, nome)| {
                                    view! { <option value=pid.to_string()>{nome.clone()}</option> }
                                }).collect_view()}
                            </select>
                        </div>

                        <div class="form-group">
                            <label>"Categoria " <span class="obrigatorio">"*"</span></label>
                            <select
                                prop:value=move || form.get().categoria_id.map(|v| v.to_string()).unwrap_or_default()
                                on:change=move |ev| {
                                    let valor = event_target_value(&ev);
                                    form.update(|f| f.categoria_id = Uuid::parse_str(&valor).ok());
                                }
                            >
                                <option value="">"Selecione uma categoria"</option>
                                {move || lookups.get().categorias.iter().map(|(cid, nome)| {
                                    view! { <option value=cid.to_string()>{nome.clone()}</option> }
                                }).collect_view()}
                            </select>
                        </div>
                    </div>

                    <div class="form-group">
                        <label>"Indicador " <span class="obrigatorio">"*"</span></label>
                        <input
                            type="text"
                            placeholder="Digite o nome do indicador"
                            prop:value=move || form.get().indicador
                            on:input=move |ev| {
                                let valor = event_target_value(&ev);
                                form.update(|f| f.indicador = valor);
                            }
                        />
                    </div>

                    <div class="form-grid">
                        <div class="form-group">
                            <label>"Tipo de Unidade " <span class="obrigatorio">"*"</span></label>
                            <select
                                prop:value=move || form.get().tipo_unidade_id.map(|v| v.to_string()).unwrap_or_default()
                                on:change=move |ev| {
                                    let valor = event_target_value(&ev);
                                    form.update(|f| f.tipo_unidade_id = valor.parse::<i32>().ok());
                                }
                            >
                                <option value="">"Selecione o tipo de unidade"</option>
                                {move || lookups.get().tipos_unidade.iter().map(|(tid, tipo)| {
                                    view! { <option value=tid.to_string()>{tipo.clone()}</option> }
                                }).collect_view()}
                            </select>
                        </div>

                        <div class="form-group">
                            <label>"Tipo de Apresentação " <span class="obrigatorio">"*"</span></label>
                            <select
                                prop:value=move || form.get().tipo_apresentacao_id.map(|v| v.to_string()).unwrap_or_default()
                                on:change=move |ev| {
                                    let valor = event_target_value(&ev);
                                    form.update(|f| f.tipo_apresentacao_id = valor.parse::<i32>().ok());
                                }
                            >
                                <option value="">"Selecione o tipo de apresentação"</option>
                                {move || lookups.get().tipos_apresentacao.iter().map(|(tid, tipo)| {
                                    view! { <option value=tid.to_string()>{tipo.clone()}</option> }
                                }).collect_view()}
                            </select>
                        </div>
                    </div>

                    <div class="form-group">
                        <label>"Observação " <span class="opcional">"(opcional)"</span></label>
                        <textarea
                            rows="3"
                            placeholder="Digite observações sobre o indicador"
                            prop:value=move || form.get().observacao.clone().unwrap_or_default()
                            on:input=move |ev| {
                                let valor = event_target_value(&ev);
                                form.update(|f| {
                                    f.observacao = if valor.is_empty() { None } else { Some(valor) };
                                });
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label>"Descrição Detalhada " <span class="opcional">"(opcional)"</span></label>
                        <textarea
                            rows="4"
                            placeholder="Digite uma descrição detalhada do indicador, sua finalidade e metodologia"
                            prop:value=move || form.get().descricao_detalhada.clone().unwrap_or_default()
                            on:input=move |ev| {
                                let valor = event_target_value(&ev);
                                form.update(|f| {
                                    f.descricao_detalhada = if valor.is_empty() { None } else { Some(valor) };
                                });
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label>"Descrição Resumida " <span class="opcional">"(opcional)"</span></label>
                        <textarea
                            rows="2"
                            placeholder="Digite uma descrição resumida do indicador"
                            prop:value=move || form.get().descricao_resumida.clone().unwrap_or_default()
                            on:input=move |ev| {
                                let valor = event_target_value(&ev);
                                form.update(|f| {
                                    f.descricao_resumida = if valor.is_empty() { None } else { Some(valor) };
                                });
                            }
                        />
                    </div>

                    <div class="form-group form-group--checkbox">
                        <input
                            type="checkbox"
                            id="obrigatorio-editar"
                            prop:checked=move || form.get().obrigatorio
                            on:change=move |ev| {
                                let marcado = event_target_checked(&ev);
                                form.update(|f| f.obrigatorio = marcado);
                            }
                        />
                        <label for="obrigatorio-editar">"Obrigatório"</label>
                    </div>
                </div>

                <div class="modal__footer">
                    <button
                        class="button button--secondary"
                        disabled=move || salvando.get()
                        on:click=move |_| on_close.run(())
                    >
                        "Cancelar"
                    </button>
                    <button
                        class="button button--primary"
                        disabled=move || salvando.get()
                        on:click=salvar
                    >
                        {move || if salvando.get() { "Salvando..." } else { "Salvar Alterações" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
