use crate::domain::a010_controle_indicador::ui::model::{self, Lookups};
use crate::shared::notificacao::NotificacaoService;
use chrono::NaiveDate;
use contracts::domain::a010_controle_indicador::{NovoControleIndicador, Recorrencia};
use leptos::prelude::*;
use uuid::Uuid;

/// Diálogo de criação de uma linha base de indicador.
///
/// Os valores do formulário ficam em um DTO tipado; campos numéricos são
/// digitados como texto (somente dígitos) e convertidos na submissão.
#[component]
#[allow(non_snake_case)]
pub fn AdicionarLinhaDialog(
    lookups: RwSignal<Lookups>,
    on_close: Callback<()>,
    on_success: Callback<()>,
) -> impl IntoView {
    let notificacoes =
        use_context::<NotificacaoService>().expect("NotificacaoService not found in context");

    let form = RwSignal::new(NovoControleIndicador::default());
    let tempo_texto = RwSignal::new(String::new());
    let repeticoes_texto = RwSignal::new(String::new());
    let prazo_texto = RwSignal::new(String::new());
    let (salvando, set_salvando) = signal(false);

    let recorrencia_ativa = move || form.get().recorrencia.ativa();

    let submeter = move |_| {
        if salvando.get() {
            return;
        }

        let mut dto = form.get();
        dto.tempo_recorrencia = tempo_texto.get().trim().parse::<i32>().ok();
        dto.repeticoes = repeticoes_texto.get().trim().parse::<i32>().unwrap_or(0);
        dto.prazo_entrega_inicial = NaiveDate::parse_from_str(prazo_texto.get().trim(), "%Y-%m-%d").ok();

        if let Err(mensagem) = dto.validate() {
            notificacoes.erro(mensagem);
            return;
        }

        set_salvando.set(true);
        let dto = dto.normalizado();
        leptos::task::spawn_local(async move {
            match model::create(&dto).await {
                Ok(resposta) => {
                    notificacoes.sucesso(format!(
                        "Linha de indicador adicionada com sucesso! Estimativa de {} linhas geradas na tabela de controle geral.",
                        resposta.linhas_previstas
                    ));
                    on_success.run(());
                }
                Err(e) => {
                    log::error!("Erro ao adicionar linha de indicador: {e}");
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
                    <h2 class="modal__title">"Adicionar Linha de Indicador"</h2>
                    <button class="modal__fechar" on:click=move |_| on_close.run(())>"×"</button>
                </div>

                <div class="modal__body">
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
                                {move || lookups.get().projetos.iter().map(|(id, nome)| {
                                    view! { <option value=id.to_string()>{nome.clone()}</option> }
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
                                {move || lookups.get().categorias.iter().map(|(id, nome)| {
                                    view! { <option value=id.to_string()>{nome.clone()}</option> }
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

                    <div class="form-grid">
                        <div class="form-group">
                            <label>"Subcategoria " <span class="obrigatorio">"*"</span></label>
                            <select
                                prop:value=move || form.get().subcategoria_id.map(|v| v.to_string()).unwrap_or_default()
                                on:change=move |ev| {
                                    let valor = event_target_value(&ev);
                                    form.update(|f| f.subcategoria_id = valor.parse::<i32>().ok());
                                }
                            >
                                <option value="">"Selecione uma subcategoria"</option>
                                {move || lookups.get().subcategorias.iter().map(|(id, nome)| {
                                    view! { <option value=id.to_string()>{nome.clone()}</option> }
                                }).collect_view()}
                            </select>
                        </div>

                        <div class="form-group">
                            <label>"Tipo de Unidade " <span class="opcional">"(opcional)"</span></label>
                            <select
                                prop:value=move || form.get().tipo_unidade_id.map(|v| v.to_string()).unwrap_or_default()
                                on:change=move |ev| {
                                    let valor = event_target_value(&ev);
                                    form.update(|f| f.tipo_unidade_id = valor.parse::<i32>().ok());
                                }
                            >
                                <option value="">"Selecione o tipo de unidade"</option>
                                {move || lookups.get().tipos_unidade.iter().map(|(id, tipo)| {
                                    view! { <option value=id.to_string()>{tipo.clone()}</option> }
                                }).collect_view()}
                            </select>
                        </div>
                    </div>

                    <div class="form-grid">
                        <div class="form-group">
                            <label>"Tipo de Apresentação " <span class="opcional">"(opcional)"</span></label>
                            <select
                                prop:value=move || form.get().tipo_apresentacao_id.map(|v| v.to_string()).unwrap_or_default()
                                on:change=move |ev| {
                                    let valor = event_target_value(&ev);
                                    form.update(|f| f.tipo_apresentacao_id = valor.parse::<i32>().ok());
                                }
                            >
                                <option value="">"Selecione o tipo de apresentação"</option>
                                {move || lookups.get().tipos_apresentacao.iter().map(|(id, tipo)| {
                                    view! { <option value=id.to_string()>{tipo.clone()}</option> }
                                }).collect_view()}
                            </select>
                        </div>

                        <div class="form-group">
                            <label>"Prazo Inicial " <span class="opcional">"(opcional)"</span></label>
                            <input
                                type="date"
                                prop:value=move || prazo_texto.get()
                                on:input=move |ev| prazo_texto.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div class="form-group">
                        <label>"Recorrência " <span class="obrigatorio">"*"</span></label>
                        <select
                            prop:value=move || form.get().recorrencia.as_str().to_string()
                            on:change=move |ev| {
                                let valor = event_target_value(&ev);
                                let recorrencia = Recorrencia::from_str(&valor);
                                form.update(|f| f.recorrencia = recorrencia);
                                // Voltar para "sem recorrência" limpa os campos dependentes
                                if !recorrencia.ativa() {
                                    tempo_texto.set(String::new());
                                    repeticoes_texto.set(String::new());
                                }
                            }
                        >
                            <option value="sem recorrencia">"Sem recorrência"</option>
                            <option value="dia">"Dia"</option>
                            <option value="mês">"Mês"</option>
                            <option value="ano">"Ano"</option>
                        </select>
                    </div>

                    <Show when=recorrencia_ativa>
                        <div class="form-group">
                            <label>"Tempo de Recorrência " <span class="obrigatorio">"*"</span></label>
                            <input
                                type="text"
                                inputmode="numeric"
                                placeholder="Ex: 1"
                                prop:value=move || tempo_texto.get()
                                on:input=move |ev| {
                                    // Somente dígitos ou campo vazio
                                    let valor = event_target_value(&ev);
                                    if valor.is_empty() || valor.chars().all(|c| c.is_ascii_digit()) {
                                        tempo_texto.set(valor);
                                    }
                                }
                            />
                            <p class="form-ajuda">
                                {move || match form.get().recorrencia {
                                    Recorrencia::Dia => "A cada quantos dias o item se repete",
                                    Recorrencia::Mes => "A cada quantos meses o item se repete",
                                    Recorrencia::Ano => "A cada quantos anos o item se repete",
                                    Recorrencia::SemRecorrencia => "",
                                }}
                            </p>
                        </div>

                        <div class="form-group">
                            <label>"Número de Repetições " <span class="obrigatorio">"*"</span></label>
                            <input
                                type="text"
                                inputmode="numeric"
                                placeholder="Ex: 3"
                                prop:value=move || repeticoes_texto.get()
                                on:input=move |ev| {
                                    let valor = event_target_value(&ev);
                                    if valor.is_empty() || valor.chars().all(|c| c.is_ascii_digit()) {
                                        repeticoes_texto.set(valor);
                                    }
                                }
                            />
                            <p class="form-ajuda">"Quantas vezes este item deve se repetir (além da linha base)"</p>
                        </div>
                    </Show>

                    <div class="form-group form-group--checkbox">
                        <input
                            type="checkbox"
                            id="obrigatorio-nova"
                            prop:checked=move || form.get().obrigatorio
                            on:change=move |ev| {
                                let marcado = event_target_checked(&ev);
                                form.update(|f| f.obrigatorio = marcado);
                            }
                        />
                        <label for="obrigatorio-nova">"Obrigatório"</label>
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
                        on:click=submeter
                    >
                        {move || if salvando.get() { "Processando..." } else { "Adicionar" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
