use chrono::Utc;
use uuid::Uuid;

use crate::domain::category::model::Category;
use crate::domain::product::model::Product;
use crate::domain::settings::model::StoreSettings;

/// Initial catalog loaded by the bootstrap endpoint on an empty store.

fn category(name: &str, slug: &str, image: &str, description: &str) -> Category {
    Category {
        id: Uuid::new_v4(),
        name: name.to_string(),
        slug: slug.to_string(),
        image: image.to_string(),
        description: description.to_string(),
    }
}

fn product(
    name: &str,
    description: &str,
    price: f64,
    category_slug: &str,
    image: &str,
    featured: bool,
) -> Product {
    Product {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        category_slug: category_slug.to_string(),
        images: vec![image.to_string()],
        featured,
        in_stock: true,
        created_at: Utc::now(),
    }
}

pub fn default_categories() -> Vec<Category> {
    vec![
        category(
            "Anillos",
            "anillos",
            "https://images.unsplash.com/photo-1758995115445-c91788f5aa24?w=1200",
            "Elegantes anillos de oro y diamantes",
        ),
        category(
            "Collares",
            "collares",
            "https://images.unsplash.com/photo-1762195024277-b3e9f3bda4dd?w=1200",
            "Collares exclusivos para toda ocasión",
        ),
        category(
            "Pulseras",
            "pulseras",
            "https://images.unsplash.com/photo-1767921804162-9c55a278768d?w=1200",
            "Pulseras artesanales de alta calidad",
        ),
        category(
            "Aretes",
            "aretes",
            "https://images.unsplash.com/photo-1584948555826-600d0ac457c7?w=1200",
            "Aretes que complementan tu estilo",
        ),
        category(
            "Relojes",
            "relojes",
            "https://images.unsplash.com/photo-1768062251819-651433f1108b?w=1200",
            "Relojes de lujo para él y ella",
        ),
    ]
}

pub fn default_products() -> Vec<Product> {
    vec![
        product(
            "Anillo Solitario Diamante",
            "Elegante anillo solitario con diamante de 0.5 quilates en oro blanco de 18k",
            2500.00,
            "anillos",
            "https://images.unsplash.com/photo-1605100804763-247f67b3557e?w=800",
            true,
        ),
        product(
            "Anillo Oro Rosa",
            "Delicado anillo de oro rosa con pequeños diamantes",
            1200.00,
            "anillos",
            "https://images.unsplash.com/photo-1602751584552-8ba73aad10e1?w=800",
            false,
        ),
        product(
            "Anillo Eternidad",
            "Anillo de eternidad con diamantes alrededor en oro amarillo",
            3200.00,
            "anillos",
            "https://images.unsplash.com/photo-1599643478518-a784e5dc4c8f?w=800",
            true,
        ),
        product(
            "Collar Perlas Naturales",
            "Elegante collar de perlas cultivadas del mar del sur",
            1800.00,
            "collares",
            "https://images.unsplash.com/photo-1515562141207-7a88fb7ce338?w=800",
            true,
        ),
        product(
            "Collar Cadena Oro",
            "Cadena fina de oro amarillo 18k estilo veneciano",
            850.00,
            "collares",
            "https://images.unsplash.com/photo-1599643477877-530eb83abc8e?w=800",
            false,
        ),
        product(
            "Collar Diamante Solitario",
            "Collar con colgante de diamante solitario en oro blanco",
            2200.00,
            "collares",
            "https://images.unsplash.com/photo-1611085583191-a3b181a88401?w=800",
            true,
        ),
        product(
            "Pulsera Tennis Diamantes",
            "Pulsera tennis con 3 quilates de diamantes en oro blanco",
            4500.00,
            "pulseras",
            "https://images.unsplash.com/photo-1611591437281-460bfbe1220a?w=800",
            true,
        ),
        product(
            "Pulsera Eslabones Oro",
            "Pulsera de eslabones gruesos en oro amarillo 18k",
            1600.00,
            "pulseras",
            "https://images.unsplash.com/photo-1573408301185-9146fe634ad0?w=800",
            false,
        ),
        product(
            "Aretes Diamante Gota",
            "Aretes colgantes con diamantes en forma de gota",
            2800.00,
            "aretes",
            "https://images.unsplash.com/photo-1535632066927-ab7c9ab60908?w=800",
            true,
        ),
        product(
            "Aretes Perla Stud",
            "Aretes clásicos de perla con base de oro",
            650.00,
            "aretes",
            "https://images.unsplash.com/photo-1617038260897-41a1f14a8ca0?w=800",
            false,
        ),
        product(
            "Aretes Argolla Oro",
            "Aretes de argolla medianos en oro amarillo pulido",
            480.00,
            "aretes",
            "https://images.unsplash.com/photo-1630019852942-f89202989a59?w=800",
            false,
        ),
        product(
            "Reloj Clásico Oro",
            "Reloj elegante con caja de oro y correa de cuero negro",
            3800.00,
            "relojes",
            "https://images.unsplash.com/photo-1524592094714-0f0654e20314?w=800",
            true,
        ),
        product(
            "Reloj Diamantes Dama",
            "Reloj para dama con bisel de diamantes",
            5200.00,
            "relojes",
            "https://images.unsplash.com/photo-1548169874-53e85f753f1e?w=800",
            true,
        ),
    ]
}

pub fn default_settings() -> StoreSettings {
    StoreSettings::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_ship_five_categories() {
        assert_eq!(default_categories().len(), 5);
    }

    #[test]
    fn should_ship_thirteen_products_eight_featured() {
        let products = default_products();
        assert_eq!(products.len(), 13);
        assert_eq!(products.iter().filter(|p| p.featured).count(), 8);
    }

    #[test]
    fn should_reference_known_category_slugs() {
        let slugs: Vec<String> = default_categories().into_iter().map(|c| c.slug).collect();
        assert!(
            default_products()
                .iter()
                .all(|p| slugs.contains(&p.category_slug))
        );
    }
}
