use super::{api, template};
use crate::domain::a010_controle_indicador::ui::model::{self, Lookups};
use crate::shared::excel::parser::read_excel_from_file;
use crate::shared::notificacao::NotificacaoService;
use crate::system::auth::context::use_auth;
use contracts::domain::a010_controle_indicador::planilha::PlanilhaControle;
use contracts::usecases::u101_importar_planilha::ImportacaoRequest;
use leptos::prelude::*;
use thaw::*;
use uuid::Uuid;
use wasm_bindgen::JsCast;

/// Aba de importação: download do modelo, upload da planilha preenchida e
/// relatório de erros de validação por linha.
#[component]
#[allow(non_snake_case)]
pub fn ImportarPlanilhaView() -> impl IntoView {
    let auth = use_auth();
    let notificacoes =
        use_context::<NotificacaoService>().expect("NotificacaoService not found in context");

    let usuario_id = auth
        .usuario
        .get_untracked()
        .map(|u| u.id)
        .unwrap_or_else(Uuid::nil);

    let lookups = RwSignal::new(Lookups::default());
    let vinculados = RwSignal::new(Option::<usize>::None);
    let arquivo = RwSignal::new(Option::<web_sys::File>::None);
    let (enviando, set_enviando) = signal(false);
    let (carregando, set_carregando) = signal(true);
    let erros_importacao = RwSignal::new(Vec::<String>::new());

    // Referências próprias desta aba (inclusive mapas nome→id do modelo)
    leptos::task::spawn_local(async move {
        match model::fetch_lookups(&usuario_id).await {
            Ok(valores) => {
                vinculados.set(Some(valores.projetos.len()));
                lookups.set(valores);
            }
            Err(e) => {
                log::error!("Erro ao carregar dados do modelo: {e}");
                notificacoes.erro("Não foi possível carregar os dados necessários");
                vinculados.set(Some(0));
            }
        }
        set_carregando.set(false);
    });

    let baixar_modelo = move |_| {
        if vinculados.get() == Some(0) {
            notificacoes.erro(
                "Você não está vinculado a nenhum projeto. Entre em contato com o administrador.",
            );
            return;
        }
        let mapas = lookups.get();
        match template::baixar_modelo(&mapas) {
            Ok(()) => notificacoes.sucesso("Modelo baixado com sucesso!"),
            Err(e) => {
                log::error!("Erro ao gerar modelo: {e}");
                notificacoes.erro("Erro ao gerar o modelo");
            }
        }
    };

    let selecionar_arquivo = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());

        if let Some(input) = input {
            if let Some(files) = input.files() {
                if let Some(file) = files.get(0) {
                    let nome = file.name().to_lowercase();
                    if !nome.ends_with(".xls") && !nome.ends_with(".xlsx") {
                        notificacoes
                            .erro("Por favor, selecione apenas arquivos Excel (.xls, .xlsx)");
                        return;
                    }
                    erros_importacao.set(Vec::new());
                    arquivo.set(Some(file));
                }
            }
        }
    };

    let enviar = move |_| {
        let Some(file) = arquivo.get() else {
            notificacoes.erro("Por favor, selecione um arquivo para upload");
            return;
        };
        if vinculados.get() == Some(0) {
            notificacoes.erro(
                "Você não está vinculado a nenhum projeto. Entre em contato com o administrador.",
            );
            return;
        }
        if auth.usuario.get_untracked().is_none() {
            notificacoes.erro("Você precisa estar logado para esta ação");
            return;
        }

        set_enviando.set(true);
        erros_importacao.set(Vec::new());
        let nome_arquivo = file.name();
        leptos::task::spawn_local(async move {
            let resultado = async {
                let bruto = read_excel_from_file(file).await?;
                // Conferência de cabeçalhos e extração das linhas antes de
                // qualquer chamada ao backend
                let planilha = PlanilhaControle::from_raw(bruto, nome_arquivo)?;
                let request = ImportacaoRequest {
                    usuario_id,
                    planilha,
                };
                api::importar(&request).await
            }
            .await;

            match resultado {
                Ok(resposta) => {
                    if resposta.erros.is_empty() {
                        notificacoes.sucesso(format!(
                            "{} indicadores importados com sucesso!",
                            resposta.inseridos
                        ));
                        arquivo.set(None);
                    } else {
                        notificacoes.erro(format!(
                            "Foram encontrados {} erro(s). Nenhuma linha foi importada.",
                            resposta.erros.len()
                        ));
                        erros_importacao.set(resposta.erros);
                    }
                }
                Err(e) => {
                    log::error!("Erro ao processar planilha: {e}");
                    notificacoes.erro(e);
                }
            }
            set_enviando.set(false);
        });
    };

    view! {
        <div class="importacao">
            <Show
                when=move || vinculados.get() != Some(0)
                fallback=|| view! {
                    <div class="empty-state">
                        <h3 class="empty-state__title">"Nenhum projeto vinculado"</h3>
                        <p class="empty-state__text">
                            "Você não está vinculado a nenhum projeto. Entre em contato com o administrador para vincular você a projetos relevantes antes de fazer upload de planilhas."
                        </p>
                    </div>
                }
            >
                <div class="info-box info-box--instrucoes">
                    <h3 class="info-box__titulo">"Como funciona"</h3>
                    <p>
                        "Você pode importar vários indicadores de uma vez usando uma planilha Excel. Baixe o modelo, preencha com os dados dos projetos vinculados e faça o upload."
                    </p>
                    <p class="info-box__nota">
                        <strong>"Importante: "</strong>
                        "o modelo mostra apenas os projetos aos quais você está vinculado. As colunas de projeto, categoria, tipo e subcategoria são preenchidas com os NOMES; a conversão para os códigos internos acontece na importação."
                    </p>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=baixar_modelo
                        disabled=Signal::derive(move || carregando.get())
                    >
                        {move || if carregando.get() {
                            "Carregando dados..."
                        } else {
                            "Baixar Modelo Excel (Indicadores)"
                        }}
                    </Button>
                </div>

                <div class="upload-box">
                    <h3 class="upload-box__titulo">"Upload de Planilha"</h3>

                    {move || if let Some(file) = arquivo.get() {
                        let nome = file.name();
                        let tamanho = format!("{:.2} KB", file.size() / 1024.0);
                        view! {
                            <div class="upload-box__arquivo">
                                <span class="upload-box__nome">{nome}</span>
                                <span class="upload-box__tamanho">{tamanho}</span>
                                <button
                                    class="button button--mini"
                                    disabled=move || enviando.get()
                                    on:click=move |_| arquivo.set(None)
                                >
                                    "Remover"
                                </button>
                            </div>
                        }.into_any()
                    } else {
                        view! {
                            <div class="upload-box__selecao">
                                <label class="button button--secondary" for="arquivo-planilha">
                                    "Selecionar arquivo"
                                </label>
                                <input
                                    id="arquivo-planilha"
                                    type="file"
                                    class="hidden"
                                    accept=".xls,.xlsx"
                                    on:change=selecionar_arquivo
                                />
                                <p class="upload-box__dica">"Excel (.xls, .xlsx)"</p>
                            </div>
                        }.into_any()
                    }}

                    <Show when=move || enviando.get()>
                        <div class="upload-box__progresso">"Upload em progresso..."</div>
                    </Show>

                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=enviar
                        disabled=Signal::derive(move || {
                            arquivo.get().is_none() || enviando.get() || carregando.get()
                        })
                    >
                        {move || if enviando.get() { "Processando..." } else { "Enviar Planilha" }}
                    </Button>
                </div>

                <Show when=move || !erros_importacao.get().is_empty()>
                    <div class="warning-box warning-box--perigo">
                        <h4 class="warning-box__titulo">
                            {move || format!(
                                "Erros de validação ({}): corrija a planilha e envie novamente",
                                erros_importacao.get().len()
                            )}
                        </h4>
                        <ul class="warning-box__lista">
                            {move || erros_importacao.get().into_iter().map(|erro| {
                                view! { <li>{erro}</li> }
                            }).collect_view()}
                        </ul>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
