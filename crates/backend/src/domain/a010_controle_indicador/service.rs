use super::repository::{self, FiltroControles};
use crate::domain::{
    a001_projeto, a002_categoria, a003_subcategoria, a005_tipo_apresentacao,
};
use crate::shared::error::ControleError;
use contracts::domain::a010_controle_indicador::{
    import::{validar_linhas, ReferenciasImportacao},
    AtualizacaoControleIndicador, ControleIndicador, ControleIndicadorId, EdicaoLinhaControle,
    NovoControleIndicador,
};
use contracts::domain::common::AggregateId;
use contracts::usecases::u101_importar_planilha::{ImportacaoRequest, ImportacaoResponse};
use uuid::Uuid;

/// Listagem escopada aos projetos vinculados do usuário. Sem vínculo, nenhuma
/// consulta é feita à tabela de controle.
pub async fn list(
    usuario_id: &Uuid,
    filtro: FiltroControles,
) -> Result<Vec<ControleIndicador>, ControleError> {
    let db = crate::shared::data::db::get_connection();
    let vinculados = a001_projeto::repository::list_vinculo_ids(&db, usuario_id).await?;
    if vinculados.is_empty() {
        return Ok(Vec::new());
    }
    Ok(repository::list(&db, &vinculados, &filtro).await?)
}

pub async fn get_by_id(id: i64) -> Result<ControleIndicador, ControleError> {
    let db = crate::shared::data::db::get_connection();
    let id = ControleIndicadorId::new(id);
    repository::find_by_id(&db, &id)
        .await?
        .ok_or(ControleError::NaoEncontrado(id.value()))
}

/// Criação de uma linha base. Devolve o id gerado e a estimativa de linhas
/// que o banco criará no controle geral (exibida ao usuário como aproximação).
pub async fn create(
    dto: NovoControleIndicador,
) -> Result<(ControleIndicadorId, i32), ControleError> {
    dto.validate().map_err(ControleError::Validacao)?;
    let item = dto.normalizado();

    let db = crate::shared::data::db::get_connection();
    let id = repository::insert(&db, &item).await?;

    tracing::info!(
        "Linha base {} criada (estimativa de {} linhas geradas)",
        id.as_string(),
        item.linhas_previstas()
    );
    Ok((id, item.linhas_previstas()))
}

/// Edição individual: valida o subconjunto editável e grava sem tocar nos
/// campos de recorrência (ver contrato do DTO).
pub async fn update(
    id: i64,
    dto: AtualizacaoControleIndicador,
) -> Result<(), ControleError> {
    dto.validate().map_err(ControleError::Validacao)?;
    let item = dto.normalizado();

    let db = crate::shared::data::db::get_connection();
    let id = ControleIndicadorId::new(id);
    repository::find_by_id(&db, &id)
        .await?
        .ok_or(ControleError::NaoEncontrado(id.value()))?;

    repository::update_editaveis(&db, &id, &item).await?;
    Ok(())
}

/// Atualização de uma linha da grade de edição em massa. Cada linha chega em
/// uma requisição própria; falhas são contabilizadas pelo chamador.
pub async fn update_linha(id: i64, linha: EdicaoLinhaControle) -> Result<(), ControleError> {
    if linha.id.value() != id {
        return Err(ControleError::Validacao(
            "Identificador da linha não confere com a rota".into(),
        ));
    }
    if let Some((_, mensagem)) = linha.erros_campos().into_iter().next() {
        return Err(ControleError::Validacao(mensagem));
    }
    let item = linha.normalizado();

    let db = crate::shared::data::db::get_connection();
    repository::find_by_id(&db, &item.id)
        .await?
        .ok_or(ControleError::NaoEncontrado(item.id.value()))?;

    repository::update_linha(&db, &item).await?;
    Ok(())
}

pub async fn delete(id: i64) -> Result<(), ControleError> {
    let db = crate::shared::data::db::get_connection();
    let id = ControleIndicadorId::new(id);
    if !repository::delete_by_id(&db, &id).await? {
        return Err(ControleError::NaoEncontrado(id.value()));
    }
    Ok(())
}

/// Importação em massa da planilha.
///
/// Monta os mapas de resolução a partir das tabelas de referência (projetos
/// restritos aos vinculados do usuário), valida todas as linhas e só insere
/// quando não resta nenhum erro. A resposta informa o total devolvido pelo
/// banco, nunca o total tentado.
pub async fn importar(request: ImportacaoRequest) -> Result<ImportacaoResponse, ControleError> {
    let db = crate::shared::data::db::get_connection();

    let vinculados = a001_projeto::repository::list_vinculo_ids(&db, &request.usuario_id).await?;
    if vinculados.is_empty() {
        return Err(ControleError::Validacao(
            "Você não está vinculado a nenhum projeto. Entre em contato com o administrador."
                .into(),
        ));
    }

    let projetos = a001_projeto::repository::list_by_ids(&db, &vinculados).await?;
    let categorias = a002_categoria::repository::list_all(&db).await?;
    let subcategorias = a003_subcategoria::repository::list_all(&db).await?;
    let tipos = a005_tipo_apresentacao::repository::list_all(&db).await?;

    let referencias = ReferenciasImportacao {
        projetos: ReferenciasImportacao::indexar(
            projetos.into_iter().map(|p| (p.nome, p.id.value())),
        ),
        categorias: ReferenciasImportacao::indexar(
            categorias.into_iter().map(|c| (c.nome, c.id.value())),
        ),
        subcategorias: ReferenciasImportacao::indexar(
            subcategorias.into_iter().map(|s| (s.nome, s.id)),
        ),
        tipos_apresentacao: ReferenciasImportacao::indexar(
            tipos.into_iter().map(|t| (t.tipo, t.id)),
        ),
        projetos_vinculados: vinculados.into_iter().collect(),
    };

    match validar_linhas(&request.planilha, &referencias) {
        Ok(validados) => {
            let inseridos = repository::insert_many(&db, &validados).await?;
            tracing::info!(
                "Importação de \"{}\": {} linhas inseridas",
                request.planilha.arquivo,
                inseridos
            );
            Ok(ImportacaoResponse::sucesso(inseridos))
        }
        Err(erros) => {
            tracing::warn!(
                "Importação de \"{}\" rejeitada com {} erro(s)",
                request.planilha.arquivo,
                erros.len()
            );
            Ok(ImportacaoResponse::rejeitada(erros))
        }
    }
}
