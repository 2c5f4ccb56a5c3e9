//! C# language definition
//!
//! Frameworks and versions are enumerated, but there is no manager list and
//! no dedicated version key.

use super::LanguageDefinition;
use crate::catalog::LanguageId;

pub struct DotNetLanguage;

impl LanguageDefinition for DotNetLanguage {
    fn id(&self) -> LanguageId {
        LanguageId::CSharp
    }

    fn frameworks(&self) -> &'static [&'static str] {
        &["ASP.NET Core", "Entity Framework", "xUnit", "Serilog"]
    }

    fn versions(&self) -> &'static [&'static str] {
        &["6.0", "7.0", "8.0"]
    }
}
