use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Abre a conexão global e garante o esquema mínimo das tabelas usadas pelo
/// painel. As tabelas de referência e o vínculo usuário↔projeto são mantidos
/// por outros sistemas; aqui só criamos a estrutura quando ela ainda não
/// existe (ambiente novo de desenvolvimento).
pub async fn initialize_database() -> anyhow::Result<()> {
    let config = crate::shared::config::load_config()?;
    let db_file = crate::shared::config::get_database_path(&config)?;

    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.clone()
    } else {
        std::env::current_dir()?.join(&db_file)
    };
    // Normaliza separadores e a forma de URL no Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    let conn = Database::connect(&db_url).await?;

    bootstrap_schema(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("database connection already initialized"))?;

    tracing::info!("Database initialized at {}", absolute_path.display());
    Ok(())
}

/// Conexão global (inicializada uma única vez em `initialize_database`)
pub fn get_connection() -> DatabaseConnection {
    DB_CONN
        .get()
        .expect("database connection not initialized")
        .clone()
}

async fn bootstrap_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    let statements = [
        r#"
        CREATE TABLE IF NOT EXISTS projetos (
            id TEXT PRIMARY KEY NOT NULL,
            nome TEXT NOT NULL
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS categorias (
            id TEXT PRIMARY KEY NOT NULL,
            nome TEXT NOT NULL
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS subcategorias (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nome TEXT NOT NULL
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS tipos_unidade_indicador (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            tipo TEXT NOT NULL
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS tipos_apresentacao (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            tipo TEXT NOT NULL
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS relacao_usuarios_projetos (
            usuario_id TEXT NOT NULL,
            projeto_id TEXT NOT NULL,
            PRIMARY KEY (usuario_id, projeto_id)
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS controle_indicador (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            projeto_id TEXT NOT NULL,
            categoria_id TEXT NOT NULL,
            subcategoria_id INTEGER,
            indicador TEXT NOT NULL,
            observacao TEXT,
            descricao_detalhada TEXT,
            descricao_resumida TEXT,
            tipo_unidade_id INTEGER,
            tipo_apresentacao_id INTEGER,
            prazo_entrega_inicial TEXT,
            recorrencia TEXT NOT NULL DEFAULT 'sem recorrencia',
            tempo_recorrencia INTEGER,
            repeticoes INTEGER NOT NULL DEFAULT 0,
            obrigatorio INTEGER NOT NULL DEFAULT 0,
            tem_documento INTEGER NOT NULL DEFAULT 0,
            created_at TEXT
        );
        "#,
    ];

    for sql in statements {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            sql.to_string(),
        ))
        .await?;
    }

    Ok(())
}
