use crate::domain::a010_controle_indicador::ui::details::EditarLinhaDialog;
use crate::domain::a010_controle_indicador::ui::edicao_massa::EdicaoMassaDialog;
use crate::domain::a010_controle_indicador::ui::excluir::ExcluirDialog;
use crate::domain::a010_controle_indicador::ui::model::{self, Filtros, Lookups};
use crate::domain::a010_controle_indicador::ui::nova::AdicionarLinhaDialog;
use crate::shared::date_utils::{format_date_opt, truncate_text};
use crate::shared::notificacao::NotificacaoService;
use crate::system::auth::context::use_auth;
use contracts::domain::a010_controle_indicador::ControleIndicador;
use leptos::prelude::*;
use uuid::Uuid;

/// Visão de tabela dos controles de indicadores: busca, filtros por projeto e
/// categoria, ações por linha e os diálogos de criação/edição/exclusão.
#[component]
#[allow(non_snake_case)]
pub fn ControleIndicadorList() -> impl IntoView {
    let auth = use_auth();
    let notificacoes =
        use_context::<NotificacaoService>().expect("NotificacaoService not found in context");

    let usuario_id = auth
        .usuario
        .get_untracked()
        .map(|u| u.id)
        .unwrap_or_else(Uuid::nil);

    let lookups = RwSignal::new(Lookups::default());
    // None enquanto os vínculos não chegam; Some(n) depois do primeiro fetch
    let vinculados = RwSignal::new(Option::<usize>::None);
    let controles = RwSignal::new(Vec::<ControleIndicador>::new());
    let loading = RwSignal::new(true);
    let filtros = RwSignal::new(Filtros::default());
    let (show_filters, set_show_filters) = signal(false);

    let (show_nova, set_show_nova) = signal(false);
    let (show_massa, set_show_massa) = signal(false);
    let editar = RwSignal::new(Option::<ControleIndicador>::None);
    let excluir = RwSignal::new(Option::<ControleIndicador>::None);

    // Referências carregadas uma vez por montagem
    leptos::task::spawn_local(async move {
        match model::fetch_lookups(&usuario_id).await {
            Ok(valores) => {
                vinculados.set(Some(valores.projetos.len()));
                lookups.set(valores);
            }
            Err(e) => {
                log::error!("Erro ao carregar referências: {e}");
                notificacoes.erro("Não foi possível carregar os dados necessários");
                vinculados.set(Some(0));
            }
        }
    });

    // Refaz a listagem sempre que a tupla de filtros ou o conjunto de
    // vínculos mudar. Sem projeto vinculado, nenhuma consulta é disparada.
    Effect::new(move |_| {
        let filtros_atuais = filtros.get();
        let Some(qtd_vinculados) = vinculados.get() else {
            return;
        };
        if qtd_vinculados == 0 {
            controles.set(Vec::new());
            loading.set(false);
            return;
        }
        loading.set(true);
        leptos::task::spawn_local(async move {
            match model::fetch_controles(&usuario_id, &filtros_atuais).await {
                Ok(itens) => controles.set(itens),
                Err(e) => {
                    log::error!("Erro ao carregar controles: {e}");
                    notificacoes.erro("Erro ao carregar dados de controle");
                }
            }
            loading.set(false);
        });
    });

    let recarregar = move || {
        // Reatribuir os filtros dispara o Effect de listagem
        filtros.set(filtros.get_untracked());
    };

    let limpar_filtros = move |_| {
        filtros.set(Filtros::default());
        set_show_filters.set(false);
    };

    let fechar_nova = Callback::new(move |_: ()| set_show_nova.set(false));
    let sucesso_nova = Callback::new(move |_: ()| {
        set_show_nova.set(false);
        recarregar();
    });
    let fechar_editar = Callback::new(move |_: ()| editar.set(None));
    let sucesso_editar = Callback::new(move |_: ()| {
        editar.set(None);
        recarregar();
    });
    let fechar_excluir = Callback::new(move |_: ()| excluir.set(None));
    let sucesso_excluir = Callback::new(move |_: ()| {
        excluir.set(None);
        recarregar();
    });
    let fechar_massa = Callback::new(move |_: ()| set_show_massa.set(false));
    let sucesso_massa = Callback::new(move |_: ()| {
        set_show_massa.set(false);
        recarregar();
    });

    view! {
        <div class="controle-lista">
            <Show
                when=move || vinculados.get() != Some(0)
                fallback=|| view! {
                    <div class="empty-state">
                        <h3 class="empty-state__title">"Nenhum projeto vinculado"</h3>
                        <p class="empty-state__text">
                            "Você não está vinculado a nenhum projeto. Entre em contato com o administrador para vincular você a projetos relevantes."
                        </p>
                    </div>
                }
            >
                <div class="toolbar">
                    <input
                        type="text"
                        class="toolbar__busca"
                        placeholder="Buscar indicadores..."
                        prop:value=move || filtros.get().busca
                        on:input=move |ev| {
                            let termo = event_target_value(&ev);
                            filtros.update(|f| f.busca = termo);
                        }
                    />
                    <button
                        class="button button--secondary"
                        class:button--active=move || show_filters.get() || filtros.get().ativos()
                        on:click=move |_| set_show_filters.update(|v| *v = !*v)
                    >
                        "Filtros"
                    </button>
                    <Show when=move || !controles.get().is_empty()>
                        <button
                            class="button button--secondary"
                            on:click=move |_| set_show_massa.set(true)
                        >
                            "Editar em Massa"
                        </button>
                    </Show>
                    <button
                        class="button button--primary"
                        on:click=move |_| set_show_nova.set(true)
                    >
                        "Adicionar Linha de Indicador"
                    </button>
                </div>

                <Show when=move || show_filters.get()>
                    <div class="filtros">
                        <div class="filtros__campo">
                            <label>"Projeto (apenas projetos vinculados)"</label>
                            <select
                                prop:value=move || filtros
                                    .get()
                                    .projeto_id
                                    .map(|id| id.to_string())
                                    .unwrap_or_default()
                                on:change=move |ev| {
                                    let valor = event_target_value(&ev);
                                    filtros.update(|f| {
                                        f.projeto_id = Uuid::parse_str(&valor).ok();
                                    });
                                }
                            >
                                <option value="">"Todos os projetos vinculados"</option>
                                {move || lookups.get().projetos.iter().map(|(id, nome)| {
                                    view! {
                                        <option value=id.to_string()>{nome.clone()}</option>
                                    }
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="filtros__campo">
                            <label>"Categoria"</label>
                            <select
                                prop:value=move || filtros
                                    .get()
                                    .categoria_id
                                    .map(|id| id.to_string())
                                    .unwrap_or_default()
                                on:change=move |ev| {
                                    let valor = event_target_value(&ev);
                                    filtros.update(|f| {
                                        f.categoria_id = Uuid::parse_str(&valor).ok();
                                    });
                                }
                            >
                                <option value="">"Todas as categorias"</option>
                                {move || lookups.get().categorias.iter().map(|(id, nome)| {
                                    view! {
                                        <option value=id.to_string()>{nome.clone()}</option>
                                    }
                                }).collect_view()}
                            </select>
                        </div>
                        <Show when=move || filtros.get().ativos()>
                            <button class="button button--secondary" on:click=limpar_filtros>
                                "Limpar Filtros"
                            </button>
                        </Show>
                    </div>
                </Show>

                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <div class="loading">"Carregando..."</div> }
                >
                    <div class="table">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"ID"</th>
                                    <th class="table__header-cell">"Projeto"</th>
                                    <th class="table__header-cell">"Categoria"</th>
                                    <th class="table__header-cell">"Indicador"</th>
                                    <th class="table__header-cell">"Descrição Resumida"</th>
                                    <th class="table__header-cell">"Descrição Detalhada"</th>
                                    <th class="table__header-cell">"Subcategoria"</th>
                                    <th class="table__header-cell">"Tipo Unidade"</th>
                                    <th class="table__header-cell">"Prazo Inicial"</th>
                                    <th class="table__header-cell">"Recorrência"</th>
                                    <th class="table__header-cell">"Obrigatório"</th>
                                    <th class="table__header-cell">"Linhas Criadas"</th>
                                    <th class="table__header-cell">"Ações"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    let itens = controles.get();
                                    let mapas = lookups.get();
                                    if itens.is_empty() {
                                        let mensagem = if !filtros.get().busca.trim().is_empty() {
                                            "Nenhum indicador encontrado para a busca"
                                        } else {
                                            "Nenhum item de controle encontrado para os projetos vinculados"
                                        };
                                        return view! {
                                            <tr>
                                                <td class="table__cell table__cell--empty" colspan="13">
                                                    {mensagem}
                                                </td>
                                            </tr>
                                        }.into_any();
                                    }
                                    itens.into_iter().map(|item| {
                                        linha_tabela(item, &mapas, editar, excluir)
                                    }).collect_view().into_any()
                                }}
                            </tbody>
                        </table>
                    </div>
                </Show>
            </Show>

            <Show when=move || show_nova.get()>
                <AdicionarLinhaDialog
                    lookups=lookups
                    on_close=fechar_nova
                    on_success=sucesso_nova
                />
            </Show>

            {move || editar.get().map(|item| view! {
                <EditarLinhaDialog
                    controle=item
                    lookups=lookups
                    on_close=fechar_editar
                    on_success=sucesso_editar
                />
            })}

            {move || excluir.get().map(|item| view! {
                <ExcluirDialog
                    controle=item
                    lookups=lookups
                    on_close=fechar_excluir
                    on_success=sucesso_excluir
                />
            })}

            <Show when=move || show_massa.get()>
                <EdicaoMassaDialog
                    registros=Signal::derive(move || controles.get())
                    lookups=lookups
                    on_close=fechar_massa
                    on_success=sucesso_massa
                />
            </Show>
        </div>
    }
}

fn linha_tabela(
    item: ControleIndicador,
    mapas: &Lookups,
    editar: RwSignal<Option<ControleIndicador>>,
    excluir: RwSignal<Option<ControleIndicador>>,
) -> impl IntoView {
    let projeto = mapas.nome_projeto(&item.projeto_id);
    let categoria = mapas.nome_categoria(&item.categoria_id);
    let subcategoria = mapas.nome_subcategoria(item.subcategoria_id);
    let tipo_unidade = mapas.nome_tipo_unidade(item.tipo_unidade_id);
    let prazo = format_date_opt(
        item.prazo_entrega_inicial
            .map(|d| d.to_string())
            .as_deref(),
    );

    let recorrencia = if item.recorrencia.ativa() {
        let tempo = item
            .tempo_recorrencia
            .map(|t| format!(" ({})", t))
            .unwrap_or_default();
        format!("{}{}", item.recorrencia.as_str(), tempo)
    } else {
        "-".to_string()
    };

    let total_linhas = item.linhas_previstas();
    let base = total_linhas / 2;

    let descricao_resumida = item
        .descricao_resumida
        .clone()
        .map(|d| truncate_text(&d, 80))
        .unwrap_or_else(|| "Não informado".to_string());
    let descricao_detalhada = item
        .descricao_detalhada
        .clone()
        .map(|d| truncate_text(&d, 80))
        .unwrap_or_else(|| "Não informado".to_string());
    let titulo_resumida = item.descricao_resumida.clone().unwrap_or_default();
    let titulo_detalhada = item.descricao_detalhada.clone().unwrap_or_default();
    let observacao = item.observacao.clone().unwrap_or_default();

    let item_para_editar = item.clone();
    let item_para_excluir = item.clone();

    view! {
        <tr class="table__row">
            <td class="table__cell">{item.id.value()}</td>
            <td class="table__cell">{projeto}</td>
            <td class="table__cell">{categoria}</td>
            <td class="table__cell">
                <p class="table__cell-destaque">{item.indicador.clone()}</p>
                <Show when={
                    let tem_observacao = !observacao.is_empty();
                    move || tem_observacao
                }>
                    <p class="table__cell-nota">{observacao.clone()}</p>
                </Show>
            </td>
            <td class="table__cell" title=titulo_resumida>{descricao_resumida}</td>
            <td class="table__cell" title=titulo_detalhada>{descricao_detalhada}</td>
            <td class="table__cell">{subcategoria}</td>
            <td class="table__cell">{tipo_unidade}</td>
            <td class="table__cell">{prazo}</td>
            <td class="table__cell">{recorrencia}</td>
            <td class="table__cell">
                {if item.obrigatorio { "Sim" } else { "Não" }}
            </td>
            <td class="table__cell">
                <span class="badge">{format!("{} linhas", total_linhas)}</span>
                <div class="table__cell-nota">{format!("{} × 2 (Meta/Real)", base)}</div>
            </td>
            <td class="table__cell">
                <button
                    class="button button--mini"
                    title="Editar indicador"
                    on:click=move |_| editar.set(Some(item_para_editar.clone()))
                >
                    "Editar"
                </button>
                <button
                    class="button button--mini button--perigo"
                    title="Excluir indicador"
                    on:click=move |_| excluir.set(Some(item_para_excluir.clone()))
                >
                    "Excluir"
                </button>
            </td>
        </tr>
    }
}
