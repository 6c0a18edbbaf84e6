use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Binding JS para escrita de arquivos Excel via SheetJS (js/excel_io.js)
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = writeExcelFile, catch)]
    fn write_excel_file(rows: JsValue, sheet_name: &str) -> Result<JsValue, JsValue>;
}

/// Gera os bytes de um arquivo .xlsx a partir de uma matriz de células
pub fn write_workbook(rows: &[Vec<String>], sheet_name: &str) -> Result<Vec<u8>, String> {
    let js_rows = js_sys::Array::new();
    for row in rows {
        let js_row = js_sys::Array::new();
        for cell in row {
            js_row.push(&JsValue::from_str(cell));
        }
        js_rows.push(&js_row);
    }

    let result = write_excel_file(js_rows.into(), sheet_name)
        .map_err(|e| format!("Erro ao gerar a planilha: {:?}", e))?;

    let uint8_array: js_sys::Uint8Array = result
        .dyn_into()
        .map_err(|_| "Resultado do writer não é um Uint8Array".to_string())?;
    let mut bytes = vec![0; uint8_array.length() as usize];
    uint8_array.copy_to(&mut bytes);
    Ok(bytes)
}
