//! Notificações transitórias (sucesso/erro) exibidas no topo da página.
//! Cada mensagem some sozinha depois de alguns segundos.

use leptos::prelude::*;

const DURACAO_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipoNotificacao {
    Sucesso,
    Erro,
}

#[derive(Debug, Clone)]
pub struct Notificacao {
    pub id: u64,
    pub tipo: TipoNotificacao,
    pub mensagem: String,
}

#[derive(Clone, Copy)]
pub struct NotificacaoService {
    itens: RwSignal<Vec<Notificacao>>,
    proximo_id: RwSignal<u64>,
}

impl NotificacaoService {
    pub fn new() -> Self {
        Self {
            itens: RwSignal::new(Vec::new()),
            proximo_id: RwSignal::new(0),
        }
    }

    pub fn itens(&self) -> RwSignal<Vec<Notificacao>> {
        self.itens
    }

    pub fn sucesso(&self, mensagem: impl Into<String>) {
        self.push(TipoNotificacao::Sucesso, mensagem.into());
    }

    pub fn erro(&self, mensagem: impl Into<String>) {
        self.push(TipoNotificacao::Erro, mensagem.into());
    }

    fn push(&self, tipo: TipoNotificacao, mensagem: String) {
        let id = self.proximo_id.get_untracked();
        self.proximo_id.set(id + 1);
        self.itens.update(|itens| {
            itens.push(Notificacao {
                id,
                tipo,
                mensagem,
            })
        });

        let itens = self.itens;
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(DURACAO_MS).await;
            itens.update(|lista| lista.retain(|n| n.id != id));
        });
    }
}

/// Área de renderização das notificações, montada uma vez no Shell
#[component]
pub fn Notificacoes() -> impl IntoView {
    let service =
        use_context::<NotificacaoService>().expect("NotificacaoService not found in context");
    let itens = service.itens();

    view! {
        <div class="notificacoes">
            {move || itens.get().into_iter().map(|n| {
                let classe = match n.tipo {
                    TipoNotificacao::Sucesso => "notificacao notificacao--sucesso",
                    TipoNotificacao::Erro => "notificacao notificacao--erro",
                };
                view! {
                    <div class=classe>
                        <span class="notificacao__texto">{n.mensagem}</span>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
