/// Utilidades de formatação de datas
///
/// Mantém a exibição pt-BR consistente em todas as telas

/// Formata uma data ISO (AAAA-MM-DD, com ou sem componente de hora) para
/// DD/MM/AAAA. Exemplo: "2024-03-15" ou "2024-03-15T14:02:26Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    if date_str.trim().is_empty() {
        return "-".to_string();
    }
    let date_part = date_str.split(['T', ' ']).next().unwrap_or(date_str);
    let partes: Vec<&str> = date_part.split('-').collect();
    if partes.len() == 3
        && partes[0].len() == 4
        && partes.iter().all(|p| p.chars().all(|c| c.is_ascii_digit()))
    {
        return format!("{}/{}/{}", partes[2], partes[1], partes[0]);
    }
    "Data inválida".to_string()
}

/// Data opcional vinda do registro; ausência vira "-"
pub fn format_date_opt(date: Option<&str>) -> String {
    match date {
        Some(d) => format_date(d),
        None => "-".to_string(),
    }
}

/// Corta textos longos para exibição em célula de tabela
pub fn truncate_text(texto: &str, max: usize) -> String {
    if texto.chars().count() <= max {
        return texto.to_string();
    }
    let cortado: String = texto.chars().take(max).collect();
    format!("{}...", cortado)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
        assert_eq!(format_date("2024-01-31 00:00:00"), "31/01/2024");
    }

    #[test]
    fn test_format_date_vazia_e_invalida() {
        assert_eq!(format_date(""), "-");
        assert_eq!(format_date("31/01/2024"), "Data inválida");
        assert_eq!(format_date("amanhã"), "Data inválida");
    }

    #[test]
    fn test_format_date_opt() {
        assert_eq!(format_date_opt(None), "-");
        assert_eq!(format_date_opt(Some("2024-12-01")), "01/12/2024");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("curto", 80), "curto");
        let longo = "x".repeat(100);
        let cortado = truncate_text(&longo, 80);
        assert_eq!(cortado.chars().count(), 83);
        assert!(cortado.ends_with("..."));
    }
}
