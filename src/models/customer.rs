// src/models/customer.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// Quantidade de referências que a ficha comporta
pub const MAX_REFERENCES: usize = 3;

// --- ENUMS ---

// Tipo do documento do cliente: pessoa física (CPF) ou jurídica (CNPJ)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub enum DocumentType {
    #[default]
    #[serde(rename = "CPF")]
    Cpf,
    #[serde(rename = "CNPJ")]
    Cnpj,
}

impl DocumentType {
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::Cpf => "CPF",
            DocumentType::Cnpj => "CNPJ",
        }
    }

    // Tamanho máximo aceito pelo campo (com pontuação)
    pub fn max_len(&self) -> usize {
        match self {
            DocumentType::Cpf => 14,
            DocumentType::Cnpj => 18,
        }
    }

    pub fn is_cpf(&self) -> bool {
        *self == DocumentType::Cpf
    }
}

// --- ENDEREÇO ---

// Mesmo formato para o endereço principal e o de entrega.
// Apenas o complemento é opcional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "60000-000")]
    pub postal_code: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Rua das Flores")]
    pub street: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "123")]
    pub number: String,

    #[schema(example = "Sala 2")]
    pub complement: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Centro")]
    pub neighborhood: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Fortaleza")]
    pub city: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "CE")]
    pub state: String,
}

// Pessoa ou empresa que pode atestar sobre o cliente
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Reference {
    #[schema(example = "José Pereira")]
    pub name: String,
    #[schema(example = "(85) 99999-0000")]
    pub contact: String,
}

// Documentos entregues junto com a ficha
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct DeliveredDocuments {
    pub articles_of_association: bool,
    pub proof_of_address: bool,
}

// --- FICHA (O Registro) ---

// Vive apenas durante a sessão do formulário: nasce vazia, é preenchida
// campo a campo e é descartada na exportação ou na limpeza.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerRecord {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Maria da Silva")]
    pub name: String,
    pub trade_name: String,
    pub state_registration: String,
    pub municipal_registration: String,
    pub email: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "8532320000")]
    pub phone: String,
    pub mobile: String,

    pub document_type: DocumentType,
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "12345678900")]
    pub document_number: String,

    #[validate(nested)]
    pub address: Address,

    // O endereço de entrega só é validado quando a seção está ativa
    pub delivery_enabled: bool,
    pub delivery_address: Address,

    pub documents: DeliveredDocuments,

    pub references_enabled: bool,
    pub references: Vec<Reference>,

    pub notes: String,
}

impl Default for CustomerRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            trade_name: String::new(),
            state_registration: String::new(),
            municipal_registration: String::new(),
            email: String::new(),
            phone: String::new(),
            mobile: String::new(),
            document_type: DocumentType::default(),
            document_number: String::new(),
            address: Address::default(),
            delivery_enabled: false,
            delivery_address: Address::default(),
            documents: DeliveredDocuments::default(),
            references_enabled: false,
            references: vec![Reference::default(); MAX_REFERENCES],
            notes: String::new(),
        }
    }
}

impl CustomerRecord {
    /// Volta todos os campos ao valor inicial.
    /// As seções opcionais (entrega e referências) ficam sempre desligadas.
    pub fn reset(&mut self) {
        *self = Self::default();
        self.delivery_enabled = false;
        self.references_enabled = false;
    }

    // Referências completadas até as três posições do formulário
    pub fn reference_slots(&self) -> Vec<Reference> {
        let mut slots: Vec<Reference> = self.references.iter().take(MAX_REFERENCES).cloned().collect();
        slots.resize(MAX_REFERENCES, Reference::default());
        slots
    }
}
