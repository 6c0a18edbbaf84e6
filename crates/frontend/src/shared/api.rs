//! Acesso à API do backend via `fetch` do navegador

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Monta a URL base da API. O backend atende sempre na porta 3000.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

async fn executar(request: Request) -> Result<Response, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;
    Ok(resp)
}

async fn corpo_texto(resp: &Response) -> Result<String, String> {
    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    text.as_string().ok_or_else(|| "bad text".to_string())
}

/// Mensagem de erro vinda do backend (`{"erro": "..."}`) ou o status HTTP cru
async fn erro_de_resposta(resp: &Response) -> String {
    if let Ok(texto) = corpo_texto(resp).await {
        if let Ok(valor) = serde_json::from_str::<serde_json::Value>(&texto) {
            if let Some(mensagem) = valor.get("erro").and_then(|e| e.as_str()) {
                return mensagem.to_string();
            }
        }
    }
    format!("HTTP {}", resp.status())
}

/// GET com resposta JSON tipada
pub async fn get_json<T: DeserializeOwned>(caminho: &str) -> Result<T, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let url = format!("{}{}", api_base(), caminho);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let resp = executar(request).await?;
    if !resp.ok() {
        return Err(erro_de_resposta(&resp).await);
    }
    let texto = corpo_texto(&resp).await?;
    serde_json::from_str(&texto).map_err(|e| format!("{e}"))
}

/// POST/PUT/DELETE com corpo JSON e resposta JSON tipada
pub async fn send_json<B: Serialize, T: DeserializeOwned>(
    metodo: &str,
    caminho: &str,
    corpo: Option<&B>,
) -> Result<T, String> {
    let opts = RequestInit::new();
    opts.set_method(metodo);
    opts.set_mode(RequestMode::Cors);

    if let Some(corpo) = corpo {
        let json = serde_json::to_string(corpo).map_err(|e| format!("{e}"))?;
        opts.set_body(&JsValue::from_str(&json));
    }

    let url = format!("{}{}", api_base(), caminho);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let resp = executar(request).await?;
    if !resp.ok() {
        return Err(erro_de_resposta(&resp).await);
    }
    let texto = corpo_texto(&resp).await?;
    serde_json::from_str(&texto).map_err(|e| format!("{e}"))
}
