use crate::domain::a010_controle_indicador::ui::model::{self, Lookups};
use crate::shared::notificacao::NotificacaoService;
use chrono::NaiveDate;
use contracts::domain::a010_controle_indicador::{
    ControleIndicador, EdicaoLinhaControle, Recorrencia,
};
use leptos::prelude::*;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// Erros por célula: (índice da linha na cópia editável, campo) → mensagem
pub type MapaErros = HashMap<(usize, &'static str), String>;

/// Recalcula o mapa de erros da grade inteira. Linhas não tocadas também são
/// validadas: o salvamento só é liberado com a grade toda consistente.
pub fn mapa_erros(linhas: &[EdicaoLinhaControle]) -> MapaErros {
    let mut erros = MapaErros::new();
    for (idx, linha) in linhas.iter().enumerate() {
        for (campo, mensagem) in linha.erros_campos() {
            erros.insert((idx, campo), mensagem);
        }
    }
    erros
}

/// Projeção de visualização da grade: busca textual por indicador, id ou nome
/// do projeto, e o corte "somente modificados". Não altera o que é salvo:
/// o salvamento percorre sempre a cópia completa.
pub fn indices_visiveis(
    linhas: &[EdicaoLinhaControle],
    nomes_projetos: &HashMap<Uuid, String>,
    termo: &str,
    somente_modificados: bool,
    modificados: &HashSet<usize>,
) -> Vec<usize> {
    let termo = termo.trim().to_lowercase();
    linhas
        .iter()
        .enumerate()
        .filter(|(idx, linha)| {
            if somente_modificados && !modificados.contains(idx) {
                return false;
            }
            if termo.is_empty() {
                return true;
            }
            if linha.indicador.to_lowercase().contains(&termo) {
                return true;
            }
            if linha.id.value().to_string().contains(&termo) {
                return true;
            }
            linha
                .projeto_id
                .and_then(|id| nomes_projetos.get(&id))
                .map(|nome| nome.to_lowercase().contains(&termo))
                .unwrap_or(false)
        })
        .map(|(idx, _)| idx)
        .collect()
}

/// Totais de uma rodada de salvamento (sucessos, falhas)
pub fn contabilizar<I: IntoIterator<Item = bool>>(resultados: I) -> (usize, usize) {
    let mut sucessos = 0;
    let mut falhas = 0;
    for ok in resultados {
        if ok {
            sucessos += 1;
        } else {
            falhas += 1;
        }
    }
    (sucessos, falhas)
}

/// Diálogo de edição em massa: grade editável sobre o conjunto atualmente
/// filtrado na tabela. As atualizações são enviadas uma a uma, em sequência;
/// falhas individuais não interrompem as demais e os totais são informados ao
/// final. O diálogo fecha e a tabela recarrega mesmo com falhas parciais.
#[component]
#[allow(non_snake_case)]
pub fn EdicaoMassaDialog(
    registros: Signal<Vec<ControleIndicador>>,
    lookups: RwSignal<Lookups>,
    on_close: Callback<()>,
    on_success: Callback<()>,
) -> impl IntoView {
    let notificacoes =
        use_context::<NotificacaoService>().expect("NotificacaoService not found in context");

    // Cópia editável congelada na abertura do diálogo
    let snapshot: Vec<EdicaoLinhaControle> = registros
        .get_untracked()
        .iter()
        .map(EdicaoLinhaControle::from_registro)
        .collect();
    let snapshot_para_reset = snapshot.clone();

    let linhas = RwSignal::new(snapshot);
    let modificados = RwSignal::new(HashSet::<usize>::new());
    let erros = RwSignal::new(MapaErros::new());
    let busca_grade = RwSignal::new(String::new());
    let (somente_modificados, set_somente_modificados) = signal(false);
    let (salvando, set_salvando) = signal(false);

    let total = move || linhas.with(|l| l.len());

    let marcar = move |idx: usize| {
        modificados.update(|m| {
            m.insert(idx);
        });
        erros.set(linhas.with_untracked(|l| mapa_erros(l)));
    };

    let reset = move |_| {
        linhas.set(snapshot_para_reset.clone());
        modificados.set(HashSet::new());
        erros.set(MapaErros::new());
        busca_grade.set(String::new());
        set_somente_modificados.set(false);
    };

    let salvar = move |_| {
        if salvando.get() {
            return;
        }

        let mapa = linhas.with_untracked(|l| mapa_erros(l));
        if !mapa.is_empty() {
            erros.set(mapa.clone());
            notificacoes.erro(format!(
                "{} erro(s) encontrado(s). Verifique os campos.",
                mapa.len()
            ));
            return;
        }

        set_salvando.set(true);
        let todas = linhas.get_untracked();
        leptos::task::spawn_local(async move {
            // Uma requisição por linha, em sequência; cada falha é isolada
            let mut resultados = Vec::with_capacity(todas.len());
            for linha in &todas {
                let linha = linha.normalizado();
                match model::update_linha(&linha).await {
                    Ok(()) => resultados.push(true),
                    Err(e) => {
                        log::error!("Erro ao atualizar ID {}: {e}", linha.id.value());
                        resultados.push(false);
                    }
                }
            }

            let (sucessos, falhas) = contabilizar(resultados);
            if sucessos > 0 {
                notificacoes.sucesso(format!("{} registro(s) atualizado(s) com sucesso!", sucessos));
            }
            if falhas > 0 {
                notificacoes.erro(format!("{} registro(s) falharam na atualização", falhas));
            }

            set_salvando.set(false);
            on_success.run(());
        });
    };

    let visiveis = move || {
        let nomes: HashMap<Uuid, String> = lookups.get().projetos.iter().cloned().collect();
        linhas.with(|l| {
            indices_visiveis(
                l,
                &nomes,
                &busca_grade.get(),
                somente_modificados.get(),
                &modificados.get(),
            )
        })
    };

    view! {
        <div class="modal-overlay">
            <div class="modal modal--larga">
                <div class="modal__header">
                    <div>
                        <h2 class="modal__title">"Editar Controles de Indicadores"</h2>
                        <p class="modal__subtitulo">
                            {move || format!(
                                "Editando {} registro(s). Modifique os campos desejados e clique em \"Salvar Todas as Alterações\".",
                                total()
                            )}
                        </p>
                    </div>
                    <button
                        class="modal__fechar"
                        disabled=move || salvando.get()
                        on:click=move |_| on_close.run(())
                    >
                        "×"
                    </button>
                </div>

                <div class="modal__body">
                    <div class="toolbar toolbar--grade">
                        <input
                            type="text"
                            class="toolbar__busca"
                            placeholder="Filtrar por indicador, ID ou projeto..."
                            prop:value=move || busca_grade.get()
                            on:input=move |ev| busca_grade.set(event_target_value(&ev))
                        />
                        <label class="toolbar__check">
                            <input
                                type="checkbox"
                                prop:checked=move || somente_modificados.get()
                                on:change=move |ev| set_somente_modificados.set(event_target_checked(&ev))
                            />
                            " Somente modificados"
                        </label>
                        <button
                            class="button button--secondary"
                            disabled=move || salvando.get()
                            on:click=reset
                        >
                            "Descartar Alterações"
                        </button>
                    </div>

                    <div class="table table--grade">
                        <table class="table__data">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"ID"</th>
                                    <th class="table__header-cell">"Projeto *"</th>
                                    <th class="table__header-cell">"Indicador *"</th>
                                    <th class="table__header-cell">"Observação"</th>
                                    <th class="table__header-cell">"Desc. Detalhada"</th>
                                    <th class="table__header-cell">"Desc. Resumida"</th>
                                    <th class="table__header-cell">"Categoria *"</th>
                                    <th class="table__header-cell">"Subcategoria *"</th>
                                    <th class="table__header-cell">"Tipo Unidade *"</th>
                                    <th class="table__header-cell">"Prazo Inicial"</th>
                                    <th class="table__header-cell">"Recorrência"</th>
                                    <th class="table__header-cell">"Tempo Rec."</th>
                                    <th class="table__header-cell">"Repetições"</th>
                                    <th class="table__header-cell">"Obrigatório"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || visiveis().into_iter().map(|idx| {
                                    linha_grade(idx, linhas, modificados, erros, lookups, marcar)
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>

                    <p class="modal__legenda">
                        "Linhas destacadas possuem alterações pendentes. O campo ID não pode ser alterado."
                    </p>
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
                        disabled=move || salvando.get() || total() == 0
                        on:click=salvar
                    >
                        {move || if salvando.get() {
                            "Salvando...".to_string()
                        } else {
                            format!("Salvar Todas as Alterações ({})", total())
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}

fn linha_grade(
    idx: usize,
    linhas: RwSignal<Vec<EdicaoLinhaControle>>,
    modificados: RwSignal<HashSet<usize>>,
    erros: RwSignal<MapaErros>,
    lookups: RwSignal<Lookups>,
    marcar: impl Fn(usize) + Copy + 'static,
) -> impl IntoView {
    let celula_com_erro =
        move |campo: &'static str| erros.with(move |e| e.contains_key(&(idx, campo)));
    let id = linhas.with_untracked(|l| l[idx].id.value());
    let sem_recorrencia =
        move || linhas.with(|l| !l[idx].recorrencia.ativa());

    view! {
        <tr
            class="table__row"
            class:table__row--modificada=move || modificados.get().contains(&idx)
        >
            <td class="table__cell table__cell-destaque">{id}</td>
            <td class="table__cell" class:table__cell--erro=move || celula_com_erro("projeto_id")>
                <select
                    prop:value=move || linhas.with(|l| {
                        l[idx].projeto_id.map(|v| v.to_string()).unwrap_or_default()
                    })
                    on:change=move |ev| {
                        let valor = event_target_value(&ev);
                        linhas.update(|l| l[idx].projeto_id = Uuid::parse_str(&valor).ok());
                        marcar(idx);
                    }
                >
                    <option value="">"Selecione..."</option>
                    {move || lookups.get().projetos.iter().map(|(pid, nome)| {
                        view! { <option value=pid.to_string()>{nome.clone()}</option> }
                    }).collect_view()}
                </select>
            </td>
            <td class="table__cell" class:table__cell--erro=move || celula_com_erro("indicador")>
                <input
                    type="text"
                    placeholder="Nome do indicador"
                    prop:value=move || linhas.with(|l| l[idx].indicador.clone())
                    on:input=move |ev| {
                        let valor = event_target_value(&ev);
                        linhas.update(|l| l[idx].indicador = valor);
                        marcar(idx);
                    }
                />
            </td>
            <td class="table__cell">
                <textarea
                    rows="2"
                    placeholder="Observação"
                    prop:value=move || linhas.with(|l| l[idx].observacao.clone().unwrap_or_default())
                    on:input=move |ev| {
                        let valor = event_target_value(&ev);
                        linhas.update(|l| {
                            l[idx].observacao = if valor.is_empty() { None } else { Some(valor) };
                        });
                        marcar(idx);
                    }
                />
            </td>
            <td class="table__cell">
                <textarea
                    rows="2"
                    placeholder="Descrição detalhada"
                    prop:value=move || linhas.with(|l| {
                        l[idx].descricao_detalhada.clone().unwrap_or_default()
                    })
                    on:input=move |ev| {
                        let valor = event_target_value(&ev);
                        linhas.update(|l| {
                            l[idx].descricao_detalhada =
                                if valor.is_empty() { None } else { Some(valor) };
                        });
                        marcar(idx);
                    }
                />
            </td>
            <td class="table__cell">
                <textarea
                    rows="2"
                    placeholder="Descrição resumida"
                    prop:value=move || linhas.with(|l| {
                        l[idx].descricao_resumida.clone().unwrap_or_default()
                    })
                    on:input=move |ev| {
                        let valor = event_target_value(&ev);
                        linhas.update(|l| {
                            l[idx].descricao_resumida =
                                if valor.is_empty() { None } else { Some(valor) };
                        });
                        marcar(idx);
                    }
                />
            </td>
            <td class="table__cell" class:table__cell--erro=move || celula_com_erro("categoria_id")>
                <select
                    prop:value=move || linhas.with(|l| {
                        l[idx].categoria_id.map(|v| v.to_string()).unwrap_or_default()
                    })
                    on:change=move |ev| {
                        let valor = event_target_value(&ev);
                        linhas.update(|l| l[idx].categoria_id = Uuid::parse_str(&valor).ok());
                        marcar(idx);
                    }
                >
                    <option value="">"Selecione..."</option>
                    {move || lookups.get().categorias.iter().map(|(cid, nome)| {
                        view! { <option value=cid.to_string()>{nome.clone()}</option> }
                    }).collect_view()}
                </select>
            </td>
            <td class="table__cell" class:table__cell--erro=move || celula_com_erro("subcategoria_id")>
                <select
                    prop:value=move || linhas.with(|l| {
                        l[idx].subcategoria_id.map(|v| v.to_string()).unwrap_or_default()
                    })
                    on:change=move |ev| {
                        let valor = event_target_value(&ev);
                        linhas.update(|l| l[idx].subcategoria_id = valor.parse::<i32>().ok());
                        marcar(idx);
                    }
                >
                    <option value="">"Selecione..."</option>
                    {move || lookups.get().subcategorias.iter().map(|(sid, nome)| {
                        view! { <option value=sid.to_string()>{nome.clone()}</option> }
                    }).collect_view()}
                </select>
            </td>
            <td class="table__cell" class:table__cell--erro=move || celula_com_erro("tipo_unidade_id")>
                <select
                    prop:value=move || linhas.with(|l| {
                        l[idx].tipo_unidade_id.map(|v| v.to_string()).unwrap_or_default()
                    })
                    on:change=move |ev| {
                        let valor = event_target_value(&ev);
                        linhas.update(|l| l[idx].tipo_unidade_id = valor.parse::<i32>().ok());
                        marcar(idx);
                    }
                >
                    <option value="">"Selecione..."</option>
                    {move || lookups.get().tipos_unidade.iter().map(|(tid, tipo)| {
                        view! { <option value=tid.to_string()>{tipo.clone()}</option> }
                    }).collect_view()}
                </select>
            </td>
            <td class="table__cell">
                <input
                    type="date"
                    prop:value=move || linhas.with(|l| {
                        l[idx]
                            .prazo_entrega_inicial
                            .map(|d| d.to_string())
                            .unwrap_or_default()
                    })
                    on:input=move |ev| {
                        let valor = event_target_value(&ev);
                        linhas.update(|l| {
                            l[idx].prazo_entrega_inicial =
                                NaiveDate::parse_from_str(&valor, "%Y-%m-%d").ok();
                        });
                        marcar(idx);
                    }
                />
            </td>
            <td class="table__cell">
                <select
                    prop:value=move || linhas.with(|l| l[idx].recorrencia.as_str().to_string())
                    on:change=move |ev| {
                        let valor = event_target_value(&ev);
                        let recorrencia = Recorrencia::from_str(&valor);
                        linhas.update(|l| {
                            l[idx].recorrencia = recorrencia;
                            if !recorrencia.ativa() {
                                l[idx].tempo_recorrencia = None;
                                l[idx].repeticoes = 0;
                            }
                        });
                        marcar(idx);
                    }
                >
                    <option value="sem recorrencia">"Sem recorrência"</option>
                    <option value="dia">"Dia"</option>
                    <option value="mês">"Mês"</option>
                    <option value="ano">"Ano"</option>
                </select>
            </td>
            <td class="table__cell" class:table__cell--erro=move || celula_com_erro("tempo_recorrencia")>
                <input
                    type="number"
                    min="1"
                    placeholder="Ex: 1"
                    disabled=sem_recorrencia
                    prop:value=move || linhas.with(|l| {
                        l[idx]
                            .tempo_recorrencia
                            .map(|t| t.to_string())
                            .unwrap_or_default()
                    })
                    on:input=move |ev| {
                        let valor = event_target_value(&ev);
                        linhas.update(|l| l[idx].tempo_recorrencia = valor.parse::<i32>().ok());
                        marcar(idx);
                    }
                />
            </td>
            <td class="table__cell" class:table__cell--erro=move || celula_com_erro("repeticoes")>
                <input
                    type="number"
                    min="0"
                    placeholder="Ex: 3"
                    disabled=sem_recorrencia
                    prop:value=move || linhas.with(|l| l[idx].repeticoes.to_string())
                    on:input=move |ev| {
                        let valor = event_target_value(&ev);
                        linhas.update(|l| l[idx].repeticoes = valor.parse::<i32>().unwrap_or(0));
                        marcar(idx);
                    }
                />
            </td>
            <td class="table__cell">
                <input
                    type="checkbox"
                    prop:checked=move || linhas.with(|l| l[idx].obrigatorio)
                    on:change=move |ev| {
                        let marcado = event_target_checked(&ev);
                        linhas.update(|l| l[idx].obrigatorio = marcado);
                        marcar(idx);
                    }
                />
            </td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a010_controle_indicador::ControleIndicadorId;

    fn linha(id: i64, indicador: &str, projeto: Uuid) -> EdicaoLinhaControle {
        EdicaoLinhaControle {
            id: ControleIndicadorId::new(id),
            projeto_id: Some(projeto),
            categoria_id: Some(Uuid::new_v4()),
            subcategoria_id: Some(1),
            indicador: indicador.to_string(),
            observacao: None,
            descricao_detalhada: None,
            descricao_resumida: None,
            tipo_unidade_id: Some(1),
            tipo_apresentacao_id: Some(1),
            prazo_entrega_inicial: None,
            recorrencia: Recorrencia::SemRecorrencia,
            tempo_recorrencia: None,
            repeticoes: 0,
            obrigatorio: false,
        }
    }

    #[test]
    fn contabiliza_sucessos_e_falhas() {
        // 5 linhas carregadas, a atualização da terceira falha no servidor
        let resultados = vec![true, true, false, true, true];
        assert_eq!(contabilizar(resultados), (4, 1));
        assert_eq!(contabilizar(Vec::<bool>::new()), (0, 0));
    }

    #[test]
    fn mapa_erros_cobre_linhas_nao_modificadas() {
        let projeto = Uuid::new_v4();
        let mut linhas = vec![linha(1, "A", projeto), linha(2, "B", projeto)];
        linhas[1].indicador = String::new();
        linhas[1].subcategoria_id = None;

        let erros = mapa_erros(&linhas);
        assert_eq!(erros.len(), 2);
        assert!(erros.contains_key(&(1, "indicador")));
        assert!(erros.contains_key(&(1, "subcategoria_id")));
    }

    #[test]
    fn filtro_da_grade_e_apenas_projecao() {
        let projeto = Uuid::new_v4();
        let linhas = vec![
            linha(10, "Taxa de conversão", projeto),
            linha(20, "Churn", projeto),
        ];
        let mut nomes = HashMap::new();
        nomes.insert(projeto, "Projeto Alpha".to_string());

        let todos = indices_visiveis(&linhas, &nomes, "", false, &HashSet::new());
        assert_eq!(todos, vec![0, 1]);

        let por_nome = indices_visiveis(&linhas, &nomes, "taxa", false, &HashSet::new());
        assert_eq!(por_nome, vec![0]);

        let por_id = indices_visiveis(&linhas, &nomes, "20", false, &HashSet::new());
        assert_eq!(por_id, vec![1]);

        let por_projeto = indices_visiveis(&linhas, &nomes, "alpha", false, &HashSet::new());
        assert_eq!(por_projeto, vec![0, 1]);

        let mut modificados = HashSet::new();
        modificados.insert(1);
        let so_modificados = indices_visiveis(&linhas, &nomes, "", true, &modificados);
        assert_eq!(so_modificados, vec![1]);
    }
}
