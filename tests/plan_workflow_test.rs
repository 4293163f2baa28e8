use std::io::Write;
use std::time::Duration;

use tempfile::NamedTempFile;

use nutri_plan_rs::catalog::{parse_catalog_json, CachedCatalog, FoodCatalog};
use nutri_plan_rs::models::FoodId;
use nutri_plan_rs::planner::{
    add_item_to_plan, check_plan, create_line_item, reorder_items_in_plan, rescale_item_in_plan,
};
use nutri_plan_rs::state::{load_plan, new_plan_file, save_plan};

const CATALOG: &str = r#"[
    {"codigo": "apple", "nome": "Maçã", "porcao_referencia": "1 unidade média",
     "peso_referencia_g": 120, "kcal_por_referencia": 62, "proteina_g": 0.3,
     "carboidrato_g": 15, "gordura_g": 0.2, "fibra_g": 2.9},
    {"codigo": "chicken", "nome": "Peito de frango grelhado", "porcao_referencia": "1 filé",
     "peso_referencia_g": 100, "kcal_por_referencia": 165, "proteina_g": 31,
     "carboidrato_g": 0, "gordura_g": 3.6, "sodio_mg": 74},
    {"codigo": "rice", "nome": "Arroz branco", "porcao_referencia": "1 colher de servir",
     "peso_referencia_g": 45, "kcal_por_referencia": 58, "proteina_g": 1.1,
     "carboidrato_g": 12.7, "gordura_g": 0.1}
]"#;

#[test]
fn test_build_save_reload_and_edit() {
    let catalog = CachedCatalog::new(parse_catalog_json(CATALOG).unwrap(), Duration::from_secs(60));

    let file = NamedTempFile::new().unwrap();
    let names = vec!["Almoço".to_string(), "Lanche".to_string()];
    let plan = new_plan_file(file.path(), "Paciente A, 2026-10-18", &names).unwrap();
    let lunch_id = plan.meals()[0].id();
    let snack_id = plan.meals()[1].id();

    let chicken = catalog.get_by_id(&FoodId::new("chicken")).unwrap();
    let rice = catalog.find_by_query("arroz").next().unwrap();
    let apple = catalog.find_by_query("MAÇÃ").next().unwrap();

    let plan = add_item_to_plan(&plan, lunch_id, create_line_item(&chicken, 1.5).unwrap()).unwrap();
    let plan = add_item_to_plan(&plan, lunch_id, create_line_item(&rice, 3.0).unwrap()).unwrap();
    let plan = add_item_to_plan(&plan, snack_id, create_line_item(&apple, 1.0).unwrap()).unwrap();
    check_plan(&plan).unwrap();
    save_plan(file.path(), &plan).unwrap();

    let reloaded = load_plan(file.path(), &catalog).unwrap();
    assert_eq!(reloaded, plan);

    let lunch = reloaded.meal(lunch_id).unwrap();
    assert_eq!(lunch.totals().energy_kcal, 248.0 + 174.0);
    assert_eq!(lunch.totals().sodium_milligrams, 111.0);

    // Reorder then rescale the rice, now first in the lunch.
    let rice_id = lunch.line_items()[1].id();
    let edited = reorder_items_in_plan(&reloaded, lunch_id, 1, 0).unwrap();
    assert_eq!(edited.totals(), reloaded.totals());
    let edited = rescale_item_in_plan(&edited, lunch_id, rice_id, 2.0).unwrap();

    let lunch = edited.meal(lunch_id).unwrap();
    assert_eq!(lunch.line_items()[0].id(), rice_id);
    assert_eq!(lunch.line_items()[0].consumed().macros.energy_kcal, 116.0);
    assert_eq!(edited.totals().energy_kcal, 248.0 + 116.0 + 62.0);
    check_plan(&edited).unwrap();
}

#[test]
fn test_plan_without_snapshots_loads_through_catalog() {
    let catalog = parse_catalog_json(CATALOG).unwrap();
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "id": "0d4c1b2a-3e5f-4a6b-9c8d-7e6f5a4b3c2d",
            "label": "Imported",
            "meals": [{{
                "id": "1a2b3c4d-5e6f-4a1b-8c2d-3e4f5a6b7c8d",
                "name": "Dinner",
                "line_items": [
                    {{"id": "2b3c4d5e-6f7a-4b2c-9d3e-4f5a6b7c8d9e", "reference_food_id": "chicken", "quantity": 2}},
                    {{"id": "3c4d5e6f-7a8b-4c3d-8e4f-5a6b7c8d9e0f", "reference_food_id": "apple", "quantity": 0.5}}
                ]
            }}]
        }}"#
    )
    .unwrap();

    let plan = load_plan(file.path(), &catalog).unwrap();
    let dinner = &plan.meals()[0];
    assert_eq!(dinner.line_items()[0].food_name(), "Peito de frango grelhado");
    assert_eq!(dinner.totals().energy_kcal, 330.0 + 31.0);
    assert_eq!(dinner.totals().weight_grams, 200.0 + 60.0);
    assert_eq!(plan.totals(), dinner.totals());
}

#[test]
fn test_unknown_food_in_stored_plan_fails_load() {
    let catalog = parse_catalog_json(CATALOG).unwrap();
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"id": "0d4c1b2a-3e5f-4a6b-9c8d-7e6f5a4b3c2d", "meals": [{{
            "id": "1a2b3c4d-5e6f-4a1b-8c2d-3e4f5a6b7c8d", "name": "Dinner",
            "line_items": [{{"id": "2b3c4d5e-6f7a-4b2c-9d3e-4f5a6b7c8d9e",
                             "reference_food_id": "tofu", "quantity": 1}}]
        }}]}}"#
    )
    .unwrap();

    assert!(load_plan(file.path(), &catalog).is_err());
}
