use crate::shared::api::api_base;
use contracts::usecases::u101_importar_planilha::{ImportacaoRequest, ImportacaoResponse};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, RequestInit, RequestMode, Response};

/// Cliente da API do caso de uso u101: envia a planilha extraída para
/// validação e inserção em lote no backend
pub async fn importar(request: &ImportacaoRequest) -> Result<ImportacaoResponse, String> {
    let window = window().ok_or("No window object")?;

    let body = serde_json::to_string(request).map_err(|e| e.to_string())?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let url = format!("{}/api/controle_indicador/importar", api_base());
    let request = web_sys::Request::new_with_str_and_init(&url, &opts)
        .map_err(|e| format!("Failed to create request: {:?}", e))?;

    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("Failed to set header: {:?}", e))?;

    let response_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("Fetch failed: {:?}", e))?;

    let response: Response = response_value.dyn_into().map_err(|_| "Not a Response")?;

    if !response.ok() {
        // O backend devolve {"erro": "..."} nos rejeites; repassa a mensagem
        if let Ok(promessa) = response.text() {
            if let Ok(texto) = wasm_bindgen_futures::JsFuture::from(promessa).await {
                if let Some(texto) = texto.as_string() {
                    if let Ok(valor) = serde_json::from_str::<serde_json::Value>(&texto) {
                        if let Some(mensagem) = valor.get("erro").and_then(|e| e.as_str()) {
                            return Err(mensagem.to_string());
                        }
                    }
                }
            }
        }
        return Err(format!("HTTP error: {}", response.status()));
    }

    let json = wasm_bindgen_futures::JsFuture::from(
        response
            .json()
            .map_err(|e| format!("Failed to parse JSON: {:?}", e))?,
    )
    .await
    .map_err(|e| format!("Failed to get JSON: {:?}", e))?;

    let response: ImportacaoResponse =
        serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())?;

    Ok(response)
}
