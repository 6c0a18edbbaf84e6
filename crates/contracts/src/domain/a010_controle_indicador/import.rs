//! Validação da importação em massa de linhas base de indicador.
//!
//! Pipeline linear: normalizar cada célula de referência, resolver nome → ID
//! contra os mapas carregados do banco, validar a linha inteira e acumular os
//! erros. Qualquer erro em qualquer linha aborta a importação antes de
//! qualquer inserção.

use super::aggregate::{NovoControleIndicador, Recorrencia};
use super::planilha::{LinhaPlanilha, PlanilhaControle};
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};
use unicode_normalization::UnicodeNormalization as _;
use uuid::Uuid;

/// Normaliza texto para busca por nome: remove acentos (decomposição NFD,
/// descartando as marcas combinantes), converte para minúsculas, apara as
/// pontas e colapsa espaços internos. "Projéto  Alpha" e "projeto alpha"
/// resolvem para a mesma chave.
pub fn normalizar_texto(texto: &str) -> String {
    let sem_acentos: String = texto
        .nfd()
        .filter(|c| !is_marca_combinante(*c))
        .collect();
    sem_acentos
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_marca_combinante(c: char) -> bool {
    // Faixa Combining Diacritical Marks, suficiente para os nomes pt-BR
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Mapas de resolução nome normalizado → ID, montados a partir das tabelas de
/// referência, mais o conjunto de projetos vinculados ao usuário
#[derive(Debug, Clone, Default)]
pub struct ReferenciasImportacao {
    pub projetos: HashMap<String, Uuid>,
    pub categorias: HashMap<String, Uuid>,
    pub tipos_apresentacao: HashMap<String, i32>,
    pub subcategorias: HashMap<String, i32>,
    pub projetos_vinculados: HashSet<Uuid>,
}

impl ReferenciasImportacao {
    /// Indexa uma lista (nome, id) pela forma normalizada do nome
    pub fn indexar<I, V>(pares: I) -> HashMap<String, V>
    where
        I: IntoIterator<Item = (String, V)>,
    {
        pares
            .into_iter()
            .map(|(nome, id)| (normalizar_texto(&nome), id))
            .collect()
    }
}

/// Valida todas as linhas da planilha.
///
/// Nenhuma linha interrompe as demais: todos os erros são coletados, cada um
/// marcado com o número da linha na planilha. A importação só prossegue se a
/// lista de erros voltar vazia; caso contrário nada é inserido.
pub fn validar_linhas(
    planilha: &PlanilhaControle,
    referencias: &ReferenciasImportacao,
) -> Result<Vec<NovoControleIndicador>, Vec<String>> {
    let mut validados = Vec::new();
    let mut erros = Vec::new();

    for linha in &planilha.linhas {
        match validar_linha(linha, referencias) {
            Ok(item) => validados.push(item),
            Err(erro) => erros.push(erro),
        }
    }

    if erros.is_empty() {
        Ok(validados)
    } else {
        Err(erros)
    }
}

/// Valida uma linha, resolvendo os nomes na ordem projeto → categoria → tipo
/// → subcategoria e interpretando os campos de texto livre. Devolve o
/// primeiro problema encontrado, marcado com o número da linha.
fn validar_linha(
    linha: &LinhaPlanilha,
    referencias: &ReferenciasImportacao,
) -> Result<NovoControleIndicador, String> {
    let numero = linha.numero;

    let projeto_nome = linha.celula("projeto_id");
    let projeto_id = referencias
        .projetos
        .get(&normalizar_texto(projeto_nome))
        .copied()
        .ok_or_else(|| {
            format!(
                "Projeto \"{}\" não encontrado ou não está vinculado (linha {})",
                projeto_nome, numero
            )
        })?;
    if !referencias.projetos_vinculados.contains(&projeto_id) {
        return Err(format!(
            "Projeto \"{}\" não está vinculado ao seu usuário (linha {})",
            projeto_nome, numero
        ));
    }

    let categoria_nome = linha.celula("categoria_id");
    let categoria_id = referencias
        .categorias
        .get(&normalizar_texto(categoria_nome))
        .copied()
        .ok_or_else(|| {
            format!(
                "Categoria \"{}\" não encontrada (linha {})",
                categoria_nome, numero
            )
        })?;

    let tipo_nome = linha.celula("tipo_indicador");
    let tipo_apresentacao_id = referencias
        .tipos_apresentacao
        .get(&normalizar_texto(tipo_nome))
        .copied()
        .ok_or_else(|| {
            format!(
                "Tipo de indicador \"{}\" não encontrado (linha {})",
                tipo_nome, numero
            )
        })?;

    let subcategoria_nome = linha.celula("subcategoria_id");
    let subcategoria_id = referencias
        .subcategorias
        .get(&normalizar_texto(subcategoria_nome))
        .copied()
        .ok_or_else(|| {
            format!(
                "Subcategoria \"{}\" não encontrada (linha {})",
                subcategoria_nome, numero
            )
        })?;

    let obrigatorio = parse_obrigatorio(linha.celula("obrigatorio")).ok_or_else(|| {
        format!(
            "Valor inválido para campo obrigatório: \"{}\". Use \"SIM\" ou \"NÃO\" (linha {})",
            linha.celula("obrigatorio"),
            numero
        )
    })?;

    let recorrencia = parse_recorrencia(linha.celula("recorrencia")).ok_or_else(|| {
        format!(
            "Valor inválido para recorrência: \"{}\" (linha {})",
            linha.celula("recorrencia"),
            numero
        )
    })?;

    let prazo_entrega_inicial = parse_data(linha.celula("prazo_entrega_inicial"))
        .map_err(|celula| format!("Data inválida \"{}\": use AAAA-MM-DD (linha {})", celula, numero))?;

    let tempo_recorrencia = parse_inteiro(linha.celula("tempo_recorrencia")).map_err(|celula| {
        format!(
            "Tempo de recorrência inválido: \"{}\" (linha {})",
            celula, numero
        )
    })?;

    let repeticoes = parse_inteiro(linha.celula("repeticoes"))
        .map_err(|celula| format!("Número de repetições inválido: \"{}\" (linha {})", celula, numero))?
        .unwrap_or(0);

    let item = NovoControleIndicador {
        projeto_id: Some(projeto_id),
        categoria_id: Some(categoria_id),
        subcategoria_id: Some(subcategoria_id),
        indicador: linha.celula("indicador").to_string(),
        observacao: opcional(linha.celula("observacao")),
        descricao_detalhada: opcional(linha.celula("descricao_detalhada")),
        descricao_resumida: opcional(linha.celula("descricao_resumida")),
        tipo_unidade_id: None,
        tipo_apresentacao_id: Some(tipo_apresentacao_id),
        prazo_entrega_inicial,
        recorrencia,
        tempo_recorrencia,
        repeticoes,
        obrigatorio,
    };

    // Mesmas regras do diálogo de criação (indicador não vazio, tempo e
    // repetições coerentes com a recorrência)
    item.validate()
        .map_err(|msg| format!("{} (linha {})", msg, numero))?;

    Ok(item.normalizado())
}

/// "sim" → true, "não"/"nao" → false; qualquer outro token é erro de linha
fn parse_obrigatorio(celula: &str) -> Option<bool> {
    match normalizar_texto(celula).as_str() {
        "sim" => Some(true),
        "nao" => Some(false),
        _ => None,
    }
}

/// Token de recorrência, tolerante a caixa e acento. Célula em branco vale
/// "sem recorrencia"; tokens começados em "sem" idem; o restante precisa ser
/// dia/mês/ano.
fn parse_recorrencia(celula: &str) -> Option<Recorrencia> {
    let token = normalizar_texto(celula);
    if token.is_empty() || token.starts_with("sem") {
        return Some(Recorrencia::SemRecorrencia);
    }
    match token.as_str() {
        "dia" => Some(Recorrencia::Dia),
        "mes" => Some(Recorrencia::Mes),
        "ano" => Some(Recorrencia::Ano),
        _ => None,
    }
}

/// Data em AAAA-MM-DD; aceita célula com componente de hora ("T" ou espaço),
/// usando só a parte da data
fn parse_data(celula: &str) -> Result<Option<NaiveDate>, String> {
    let celula = celula.trim();
    if celula.is_empty() {
        return Ok(None);
    }
    let parte_data = celula
        .split(['T', ' '])
        .next()
        .unwrap_or(celula);
    NaiveDate::parse_from_str(parte_data, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| celula.to_string())
}

fn parse_inteiro(celula: &str) -> Result<Option<i32>, String> {
    let celula = celula.trim();
    if celula.is_empty() {
        return Ok(None);
    }
    celula
        .parse::<i32>()
        .map(Some)
        .map_err(|_| celula.to_string())
}

fn opcional(celula: &str) -> Option<String> {
    let celula = celula.trim();
    if celula.is_empty() {
        None
    } else {
        Some(celula.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a010_controle_indicador::planilha::COLUNAS_MODELO;

    fn referencias() -> (ReferenciasImportacao, Uuid, Uuid) {
        let projeto_id = Uuid::new_v4();
        let categoria_id = Uuid::new_v4();
        let mut refs = ReferenciasImportacao::default();
        refs.projetos =
            ReferenciasImportacao::indexar(vec![("Projeto Alpha".to_string(), projeto_id)]);
        refs.categorias =
            ReferenciasImportacao::indexar(vec![("Qualidade".to_string(), categoria_id)]);
        refs.tipos_apresentacao =
            ReferenciasImportacao::indexar(vec![("Percentual".to_string(), 1)]);
        refs.subcategorias = ReferenciasImportacao::indexar(vec![("Gestão".to_string(), 3)]);
        refs.projetos_vinculados.insert(projeto_id);
        (refs, projeto_id, categoria_id)
    }

    fn linha(numero: usize, valores: &[(&str, &str)]) -> LinhaPlanilha {
        let mut mapa: HashMap<String, String> = COLUNAS_MODELO
            .iter()
            .map(|c| (c.to_string(), String::new()))
            .collect();
        for (coluna, valor) in valores {
            mapa.insert(coluna.to_string(), valor.to_string());
        }
        LinhaPlanilha {
            numero,
            valores: mapa,
        }
    }

    fn linha_valida(numero: usize) -> LinhaPlanilha {
        linha(
            numero,
            &[
                ("projeto_id", "Projeto Alpha"),
                ("categoria_id", "Qualidade"),
                ("indicador", "Taxa de conversão"),
                ("tipo_indicador", "Percentual"),
                ("subcategoria_id", "Gestão"),
                ("obrigatorio", "SIM"),
                ("recorrencia", "mês"),
                ("tempo_recorrencia", "1"),
                ("repeticoes", "11"),
                ("prazo_entrega_inicial", "2024-01-31"),
            ],
        )
    }

    fn planilha(linhas: Vec<LinhaPlanilha>) -> PlanilhaControle {
        PlanilhaControle {
            arquivo: "modelo.xlsx".to_string(),
            linhas,
        }
    }

    #[test]
    fn normalizacao_unifica_variantes_do_nome() {
        let (refs, projeto_id, _) = referencias();
        for variante in [
            "Projeto Alpha",
            "projeto alpha",
            "PROJETO   ALPHA",
            "Projéto Alpha",
        ] {
            assert_eq!(
                refs.projetos.get(&normalizar_texto(variante)),
                Some(&projeto_id),
                "variante: {variante}"
            );
        }
    }

    #[test]
    fn linha_valida_resolve_ids_e_normaliza() {
        let (refs, projeto_id, categoria_id) = referencias();
        let itens = validar_linhas(&planilha(vec![linha_valida(3)]), &refs).unwrap();

        assert_eq!(itens.len(), 1);
        let item = &itens[0];
        assert_eq!(item.projeto_id, Some(projeto_id));
        assert_eq!(item.categoria_id, Some(categoria_id));
        assert_eq!(item.tipo_apresentacao_id, Some(1));
        assert_eq!(item.subcategoria_id, Some(3));
        assert_eq!(item.recorrencia, Recorrencia::Mes);
        assert_eq!(item.repeticoes, 11);
        assert!(item.obrigatorio);
        assert_eq!(
            item.prazo_entrega_inicial,
            NaiveDate::from_ymd_opt(2024, 1, 31)
        );
    }

    #[test]
    fn projeto_nao_vinculado_e_erro_mesmo_existindo() {
        let (mut refs, projeto_id, _) = referencias();
        refs.projetos_vinculados.remove(&projeto_id);

        let erros = validar_linhas(&planilha(vec![linha_valida(3)]), &refs).unwrap_err();
        assert_eq!(erros.len(), 1);
        assert!(erros[0].contains("não está vinculado"), "{}", erros[0]);
    }

    #[test]
    fn token_obrigatorio_invalido_bloqueia_lote_inteiro() {
        let (refs, _, _) = referencias();
        let mut ruim = linha_valida(4);
        ruim.valores
            .insert("obrigatorio".to_string(), "talvez".to_string());

        // linha 5 perfeitamente válida: ainda assim nada é importado
        let resultado = validar_linhas(&planilha(vec![ruim, linha_valida(5)]), &refs);
        let erros = resultado.unwrap_err();
        assert_eq!(erros.len(), 1);
        assert!(erros[0].contains("linha 4"), "{}", erros[0]);
        assert!(erros[0].contains("talvez"), "{}", erros[0]);
    }

    #[test]
    fn obrigatorio_aceita_nao_com_e_sem_acento() {
        assert_eq!(parse_obrigatorio("NÃO"), Some(false));
        assert_eq!(parse_obrigatorio("nao"), Some(false));
        assert_eq!(parse_obrigatorio("Sim"), Some(true));
        assert_eq!(parse_obrigatorio(""), None);
    }

    #[test]
    fn recorrencia_em_branco_vira_sem_recorrencia() {
        assert_eq!(parse_recorrencia(""), Some(Recorrencia::SemRecorrencia));
        assert_eq!(
            parse_recorrencia("Sem Recorrência"),
            Some(Recorrencia::SemRecorrencia)
        );
        assert_eq!(parse_recorrencia("MÊS"), Some(Recorrencia::Mes));
        assert_eq!(parse_recorrencia("quinzenal"), None);
    }

    #[test]
    fn indicador_em_branco_e_erro_de_linha() {
        let (refs, _, _) = referencias();
        let mut ruim = linha_valida(3);
        ruim.valores
            .insert("indicador".to_string(), "   ".to_string());

        let erros = validar_linhas(&planilha(vec![ruim]), &refs).unwrap_err();
        assert!(erros[0].contains("linha 3"), "{}", erros[0]);
    }

    #[test]
    fn erros_sao_acumulados_por_linha() {
        let (refs, _, _) = referencias();
        let mut r4 = linha_valida(4);
        r4.valores
            .insert("categoria_id".to_string(), "Inexistente".to_string());
        let mut r5 = linha_valida(5);
        r5.valores
            .insert("tempo_recorrencia".to_string(), "abc".to_string());

        let erros = validar_linhas(&planilha(vec![r4, r5]), &refs).unwrap_err();
        assert_eq!(erros.len(), 2);
        assert!(erros[0].contains("linha 4"));
        assert!(erros[1].contains("linha 5"));
    }

    #[test]
    fn data_com_hora_usa_so_a_parte_da_data() {
        assert_eq!(
            parse_data("2024-01-31T00:00:00").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31)
        );
        assert!(parse_data("31/01/2024").is_err());
        assert_eq!(parse_data("").unwrap(), None);
    }
}
