//! The flat résumé record collected from the form.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

use crate::error::{Error, Result};

/// Named fields of a [`ResumeRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Phone,
    Location,
    Linkedin,
    Portfolio,
    Summary,
    Education,
    Experience,
    Skills,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 10] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Location,
        Field::Linkedin,
        Field::Portfolio,
        Field::Summary,
        Field::Education,
        Field::Experience,
        Field::Skills,
    ];

    /// Stable key used in JSON snapshots.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Location => "location",
            Field::Linkedin => "linkedin",
            Field::Portfolio => "portfolio",
            Field::Summary => "summary",
            Field::Education => "education",
            Field::Experience => "experience",
            Field::Skills => "skills",
        }
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Location => "Location",
            Field::Linkedin => "LinkedIn",
            Field::Portfolio => "Portfolio",
            Field::Summary => "Professional summary",
            Field::Education => "Education",
            Field::Experience => "Professional experience",
            Field::Skills => "Skills",
        }
    }

    /// Name and email must be present before anything is generated.
    pub fn is_required(self) -> bool {
        matches!(self, Field::Name | Field::Email)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Raw text of every form field.
///
/// Multi-line blocks (`education`, `experience`, `skills`) keep their `\n`
/// separators; line order is significant. Missing keys deserialize as empty
/// strings, and the Spanish form ids (`nombre`, `telefono`, ...) are accepted
/// so autosave snapshots load unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeRecord {
    #[serde(alias = "nombre")]
    pub name: String,

    pub email: String,

    #[serde(alias = "telefono")]
    pub phone: String,

    #[serde(alias = "ubicacion")]
    pub location: String,

    pub linkedin: String,

    pub portfolio: String,

    #[serde(alias = "resumen")]
    pub summary: String,

    #[serde(alias = "educacion")]
    pub education: String,

    #[serde(alias = "experiencia")]
    pub experience: String,

    #[serde(alias = "habilidades")]
    pub skills: String,
}

impl ResumeRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record holding only the mandatory fields.
    pub fn with_identity(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    /// Get a field by key.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Location => &self.location,
            Field::Linkedin => &self.linkedin,
            Field::Portfolio => &self.portfolio,
            Field::Summary => &self.summary,
            Field::Education => &self.education,
            Field::Experience => &self.experience,
            Field::Skills => &self.skills,
        }
    }

    /// Set a field by key.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Location => self.location = value,
            Field::Linkedin => self.linkedin = value,
            Field::Portfolio => self.portfolio = value,
            Field::Summary => self.summary = value,
            Field::Education => self.education = value,
            Field::Experience => self.experience = value,
            Field::Skills => self.skills = value,
        }
    }

    /// Builder-style variant of [`ResumeRecord::set`].
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Copy of the record with every field trimmed, as the form submits it.
    pub fn trimmed(&self) -> Self {
        let mut record = Self::new();
        for field in Field::ALL {
            record.set(field, self.get(field).trim());
        }
        record
    }

    /// Whether a field holds non-whitespace text.
    pub fn has(&self, field: Field) -> bool {
        !self.get(field).trim().is_empty()
    }

    /// Fields that are required but empty.
    pub fn missing_required(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| f.is_required() && !self.has(*f))
            .collect()
    }

    /// Check the mandatory fields.
    ///
    /// Returns the first missing field as [`Error::MissingRequiredField`].
    pub fn validate(&self) -> Result<()> {
        match self.missing_required().first() {
            Some(field) => Err(Error::MissingRequiredField(*field)),
            None => Ok(()),
        }
    }

    /// [`ResumeRecord::validate`] plus a shape check on the email address.
    pub fn validate_strict(&self) -> Result<()> {
        self.validate()?;
        if !self.has_valid_email() {
            return Err(Error::InvalidEmail(self.email.trim().to_string()));
        }
        Ok(())
    }

    /// Loose `local@domain.tld` check.
    pub fn has_valid_email(&self) -> bool {
        email_pattern().is_match(self.email.trim())
    }

    /// Parse a record from a JSON snapshot.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the record as a pretty-printed JSON snapshot.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// A complete sample record, useful for demos and previews.
    pub fn example() -> Self {
        Self {
            name: "María Elena García Rodríguez".to_string(),
            email: "maria.garcia@email.com".to_string(),
            phone: "+34 123 456 789".to_string(),
            location: "Madrid, España".to_string(),
            linkedin: "linkedin.com/in/mariagarcia".to_string(),
            portfolio: "mariagarcia-portfolio.com".to_string(),
            summary: "Profesional egresada en Administración de Empresas con especialización en \
                      análisis financiero, con un enfoque proactivo y orientado a resultados. \
                      Cuento con más de 3 años de experiencia en análisis de datos, gestión de \
                      riesgos financieros y liderazgo de equipos."
                .to_string(),
            education: [
                "Máster en Administración de Empresas (MBA)",
                "Universidad Complutense de Madrid, Madrid, España",
                "2020 - 2022",
                "",
                "Licenciatura en Economía y Finanzas",
                "Universidad Autónoma de Madrid, Madrid, España",
                "2016 - 2020",
                "Nota: Cum Laude (8.7/10)",
            ]
            .join("\n"),
            experience: [
                "Analista Senior de Negocios",
                "Banco Santander, Madrid, España - Enero 2022 - Presente",
                "• Desarrollo e implementación de estrategias de análisis financiero para portafolios de más de €50M",
                "• Liderazgo de equipo de 5 analistas junior en proyectos de transformación digital",
                "• Creación de modelos predictivos que mejoraron la eficiencia operativa en un 25%",
                "",
                "Analista de Riesgos Financieros",
                "BBVA, Madrid, España - Junio 2020 - Diciembre 2021",
                "• Evaluación y mitigación de riesgos crediticios en cartera de préstamos comerciales",
                "• Reducción del 15% en pérdidas por morosidad mediante implementación de nuevos criterios",
            ]
            .join("\n"),
            skills: [
                "Competencias Técnicas: Python, R, SQL, Excel Avanzado, Power BI, Tableau",
                "",
                "Idiomas: Español (Nativo), Inglés (C2 - Proficiency), Francés (B2 - Intermedio Alto)",
                "",
                "Certificaciones: CFA Level II Candidate, FRM Part I, Scrum Master Certified",
            ]
            .join("\n"),
        }
    }
}

fn email_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_name_and_email() {
        let record = ResumeRecord::with_identity("Ana", "");
        assert!(matches!(
            record.validate(),
            Err(Error::MissingRequiredField(Field::Email))
        ));

        let record = ResumeRecord::with_identity("   ", "ana@example.com");
        assert!(matches!(
            record.validate(),
            Err(Error::MissingRequiredField(Field::Name))
        ));

        assert!(ResumeRecord::with_identity("Ana", "ana@example.com")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_missing_required_lists_both() {
        let record = ResumeRecord::new();
        assert_eq!(record.missing_required(), vec![Field::Name, Field::Email]);
    }

    #[test]
    fn test_validate_strict_email() {
        let record = ResumeRecord::with_identity("Ana", "not-an-email");
        assert!(record.validate().is_ok());
        assert!(matches!(
            record.validate_strict(),
            Err(Error::InvalidEmail(_))
        ));
        assert!(ResumeRecord::with_identity("Ana", "ana@example.com")
            .validate_strict()
            .is_ok());
    }

    #[test]
    fn test_get_set_roundtrip_all_fields() {
        let mut record = ResumeRecord::new();
        for field in Field::ALL {
            record.set(field, field.label());
        }
        for field in Field::ALL {
            assert_eq!(record.get(field), field.label());
        }
    }

    #[test]
    fn test_email_shape() {
        let valid = ["ana@example.com", " ana.perez@mail.uni.es ", "a@b.co"];
        let invalid = ["ana-at-example", "ana@example", "ana perez@example.com", "@example.com"];

        for email in valid {
            assert!(ResumeRecord::with_identity("Ana", email).has_valid_email(), "{}", email);
        }
        for email in invalid {
            assert!(!ResumeRecord::with_identity("Ana", email).has_valid_email(), "{}", email);
        }
    }

    #[test]
    fn test_trimmed() {
        let record = ResumeRecord::with_identity("  Ana  ", "\tana@example.com\n")
            .with(Field::Skills, "\nRust: async\n");
        let trimmed = record.trimmed();
        assert_eq!(trimmed.name, "Ana");
        assert_eq!(trimmed.email, "ana@example.com");
        assert_eq!(trimmed.skills, "Rust: async");
    }

    #[test]
    fn test_from_json_accepts_form_ids() {
        let json = r#"{
            "nombre": "Luis",
            "email": "luis@example.com",
            "telefono": "555",
            "habilidades": "Idiomas: Español"
        }"#;
        let record = ResumeRecord::from_json(json).unwrap();
        assert_eq!(record.name, "Luis");
        assert_eq!(record.phone, "555");
        assert_eq!(record.skills, "Idiomas: Español");
        assert!(record.summary.is_empty());
    }

    #[test]
    fn test_example_is_valid() {
        let record = ResumeRecord::example();
        assert!(record.validate_strict().is_ok());
        assert!(record.has(Field::Experience));
    }
}
