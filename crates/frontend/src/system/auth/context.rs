//! Sessão do usuário logado.
//!
//! Autenticação acontece fora deste painel; o objeto do usuário chega pronto
//! no storage do navegador (chave `sessao_usuario`) e aqui é apenas
//! consumido. Sem usuário na sessão, as telas mostram o aviso de sessão
//! ausente e nenhuma ação é habilitada.

use contracts::system::Usuario;
use leptos::prelude::*;

const CHAVE_SESSAO: &str = "sessao_usuario";

#[derive(Clone, Copy)]
pub struct AuthContext {
    pub usuario: RwSignal<Option<Usuario>>,
}

/// Lê o usuário da sessão e disponibiliza o contexto para toda a árvore
pub fn provide_auth() {
    let usuario = RwSignal::new(carregar_usuario());
    provide_context(AuthContext { usuario });
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext not found in context")
}

fn carregar_usuario() -> Option<Usuario> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let bruto = storage.get_item(CHAVE_SESSAO).ok()??;
    match serde_json::from_str::<Usuario>(&bruto) {
        Ok(usuario) => Some(usuario),
        Err(e) => {
            log::warn!("Sessão inválida no storage: {e}");
            None
        }
    }
}
