//! Typed payloads exchanged with the REST backend.
//!
//! DESIGN
//! ======
//! The backend is loose about shapes: ids arrive as numbers or strings,
//! optional members are often missing, and some names are Portuguese. Every
//! optional member here has a serde default so consumers never null-check
//! raw JSON, and aliases absorb the naming drift.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Accept a JSON string or number and keep it as a string id.
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => Ok(n.as_u64().unwrap_or_default()),
        Some(Value::String(s)) => Ok(s.trim().parse().unwrap_or_default()),
        _ => Ok(0),
    }
}

fn default_true() -> bool {
    true
}

fn default_link() -> String {
    "#".to_owned()
}

// =============================================================================
// ACCOUNTS
// =============================================================================

/// Administrator privilege level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Admin,
    SuperAdmin,
}

impl Role {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::SuperAdmin => "Super Admin",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::SuperAdmin => "super_admin",
        }
    }
}

/// The logged-in administrator, as cached in the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(alias = "nome")]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default, rename = "lastLoginAt", alias = "ultimoLogin", skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<String>,
}

impl UserProfile {
    /// First word of the name, for greetings.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("Administrador")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest<'a> {
    pub current_password: &'a str,
    pub new_password: &'a str,
}

/// Row of the administrators screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(alias = "name")]
    pub nome: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default = "default_true")]
    pub ativo: bool,
    #[serde(default, rename = "ultimoLogin", skip_serializing_if = "Option::is_none")]
    pub ultimo_login: Option<String>,
}

/// Body of `POST /admins`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewAdmin {
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub role: Role,
    pub ativo: bool,
}

/// Body of `PUT /admins/:id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AdminUpdate {
    pub nome: String,
    pub email: String,
    pub role: Role,
    pub ativo: bool,
}

// =============================================================================
// CONTENT
// =============================================================================

/// An event listed on `/eventos`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    pub titulo: String,
    #[serde(default)]
    pub descricao: String,
    /// Event date as sent by the backend (ISO 8601).
    #[serde(default)]
    pub data: String,
    #[serde(default)]
    pub local: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participantes: Option<String>,
    #[serde(default)]
    pub categoria: String,
    #[serde(default)]
    pub imagem: String,
    #[serde(default)]
    pub destaque: bool,
    #[serde(default = "default_true")]
    pub ativo: bool,
    #[serde(default, rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Body of `POST /eventos` and `PUT /eventos/:id`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    pub titulo: String,
    pub descricao: String,
    pub data: String,
    pub local: String,
    pub participantes: String,
    pub categoria: String,
    pub imagem: String,
    pub destaque: bool,
}

impl From<&Event> for EventDraft {
    fn from(event: &Event) -> Self {
        Self {
            titulo: event.titulo.clone(),
            descricao: event.descricao.clone(),
            data: event.data.clone(),
            local: event.local.clone(),
            participantes: event.participantes.clone().unwrap_or_default(),
            categoria: event.categoria.clone(),
            imagem: event.imagem.clone(),
            destaque: event.destaque,
        }
    }
}

/// A news item listed on `/noticias`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct News {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    pub titulo: String,
    #[serde(default)]
    pub resumo: String,
    #[serde(default)]
    pub conteudo: String,
    #[serde(default)]
    pub data: String,
    #[serde(default)]
    pub autor: String,
    #[serde(default)]
    pub categoria: String,
    #[serde(default)]
    pub imagem: String,
    #[serde(default = "default_link")]
    pub link: String,
    #[serde(default)]
    pub destaque: bool,
    #[serde(default = "default_true")]
    pub ativo: bool,
    #[serde(default, rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Body of `POST /noticias` and `PUT /noticias/:id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsDraft {
    pub titulo: String,
    pub resumo: String,
    pub conteudo: String,
    pub data: String,
    pub autor: String,
    pub categoria: String,
    pub imagem: String,
    pub link: String,
    pub destaque: bool,
}

impl Default for NewsDraft {
    fn default() -> Self {
        Self {
            titulo: String::new(),
            resumo: String::new(),
            conteudo: String::new(),
            data: String::new(),
            autor: String::new(),
            categoria: String::new(),
            imagem: String::new(),
            link: default_link(),
            destaque: false,
        }
    }
}

impl From<&News> for NewsDraft {
    fn from(news: &News) -> Self {
        Self {
            titulo: news.titulo.clone(),
            resumo: news.resumo.clone(),
            conteudo: news.conteudo.clone(),
            data: news.data.clone(),
            autor: news.autor.clone(),
            categoria: news.categoria.clone(),
            imagem: news.imagem.clone(),
            link: news.link.clone(),
            destaque: news.destaque,
        }
    }
}

/// Anything that can be ordered by recency on the dashboard.
pub trait Dated {
    /// `createdAt` when known, otherwise the content date.
    fn recency_key(&self) -> &str;
}

impl Dated for Event {
    fn recency_key(&self) -> &str {
        self.created_at.as_deref().unwrap_or(&self.data)
    }
}

impl Dated for News {
    fn recency_key(&self) -> &str {
        self.created_at.as_deref().unwrap_or(&self.data)
    }
}

// =============================================================================
// CONTACT
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub instagram: String,
    #[serde(default)]
    pub twitter: String,
}

/// Organization contact details shown on the public site.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub telefone: String,
    #[serde(default)]
    pub endereco: String,
    #[serde(default)]
    pub horario_funcionamento: String,
    #[serde(default)]
    pub redes_sociais: SocialLinks,
}

impl ContactInfo {
    /// Details shown when `/contatos` cannot be loaded.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            email: "blockchain@insper.edu.br".to_owned(),
            telefone: String::new(),
            endereco: "Rua Quatá, 300 - Vila Olímpia, São Paulo - SP".to_owned(),
            horario_funcionamento: "Segunda a sexta, 9h às 18h".to_owned(),
            redes_sociais: SocialLinks {
                linkedin: "https://www.linkedin.com/company/blockchain-insper".to_owned(),
                instagram: "https://www.instagram.com/blockchaininsper".to_owned(),
                twitter: String::new(),
            },
        }
    }
}

/// A message submitted through the public contact form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    pub nome: String,
    pub email: String,
    #[serde(default)]
    pub assunto: String,
    #[serde(default)]
    pub mensagem: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_envio: Option<String>,
    #[serde(default)]
    pub lida: bool,
    #[serde(default)]
    pub respondida: bool,
}

/// Body of `POST /contatos/mensagem`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContactMessage {
    pub nome: String,
    pub email: String,
    pub assunto: String,
    pub mensagem: String,
}

/// Body of `PUT /contatos/mensagens/:id`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MessageFlags {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lida: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub respondida: Option<bool>,
}

// =============================================================================
// BACK OFFICE
// =============================================================================

/// Result of `POST /admin/upload`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    #[serde(default)]
    pub filename: String,
    #[serde(default, alias = "path")]
    pub url: String,
}

impl UploadedImage {
    /// `filename`, or the last segment of `url` when the backend omits it.
    #[must_use]
    pub fn name(&self) -> &str {
        if self.filename.is_empty() {
            self.url.rsplit('/').next().unwrap_or_default()
        } else {
            &self.filename
        }
    }
}

/// One entry of `GET /admin/backups`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupInfo {
    pub filename: String,
    #[serde(default, alias = "createdAt")]
    pub date: String,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub size: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventStats {
    #[serde(default, deserialize_with = "deserialize_count")]
    pub total: u64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub destaques: u64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub recentes: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsStats {
    #[serde(default, deserialize_with = "deserialize_count")]
    pub total: u64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub recentes: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageStats {
    #[serde(default, deserialize_with = "deserialize_count")]
    pub nao_lidas: u64,
}

/// Counters shown on the admin dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub eventos: EventStats,
    #[serde(default)]
    pub noticias: NewsStats,
    #[serde(default)]
    pub mensagens: MessageStats,
}

impl DashboardStats {
    /// Items created recently across events and news.
    #[must_use]
    pub fn recent_total(&self) -> u64 {
        self.eventos.recentes.saturating_add(self.noticias.recentes)
    }
}
