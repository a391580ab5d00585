use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::settings::model::{BankInfo, StoreSettings};

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct BankInfoDto {
    pub bank_name: String,
    pub account_number: String,
    pub account_holder: String,
    pub cedula: String,
}

/// Full settings record; PUT replaces it wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct StoreSettingsDto {
    pub store_name: String,
    pub location: String,
    pub whatsapp_number: String,
    pub bank_info: BankInfoDto,
}

impl From<StoreSettings> for StoreSettingsDto {
    fn from(settings: StoreSettings) -> Self {
        Self {
            store_name: settings.store_name,
            location: settings.location,
            whatsapp_number: settings.whatsapp_number,
            bank_info: BankInfoDto {
                bank_name: settings.bank_info.bank_name,
                account_number: settings.bank_info.account_number,
                account_holder: settings.bank_info.account_holder,
                cedula: settings.bank_info.cedula,
            },
        }
    }
}

impl From<StoreSettingsDto> for StoreSettings {
    fn from(dto: StoreSettingsDto) -> Self {
        StoreSettings {
            store_name: dto.store_name,
            location: dto.location,
            whatsapp_number: dto.whatsapp_number,
            bank_info: BankInfo {
                bank_name: dto.bank_info.bank_name,
                account_number: dto.bank_info.account_number,
                account_holder: dto.bank_info.account_holder,
                cedula: dto.bank_info.cedula,
            },
        }
    }
}
