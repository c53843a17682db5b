use crate::brewing::color::usage_badge;
use crate::brewing::dto::{
    BeerRecipe, ExtraIngredient, GrainBill, HopAddition, WaterAmount, Yeast,
};
use crate::brewing::repo::{BeerRecipeRow, GrainRow, HopRow, IngredientRow};

/// Builds the fully-resolved view model from a stored recipe row and its
/// child rows. Total over any mix of present and absent optional fields:
/// missing numerics become 0, missing strings become "", missing child
/// collections become empty vectors. `id`, `title`, and `difficulty` pass
/// through untouched. No unit conversion, no derived-metric math; the
/// stored values are carried as-is.
pub fn normalize(
    row: BeerRecipeRow,
    grains: Vec<GrainRow>,
    hops: Vec<HopRow>,
    extras: Vec<IngredientRow>,
) -> BeerRecipe {
    BeerRecipe {
        id: row.id,
        title: row.title,
        description: row.description.unwrap_or_default(),
        style: row.style.unwrap_or_default(),
        difficulty: row.difficulty,
        grains: grains.into_iter().map(grain_bill).collect(),
        hops: hops.into_iter().map(hop_addition).collect(),
        additional_ingredients: extras.into_iter().map(extra_ingredient).collect(),
        water_amount: WaterAmount {
            mash: row.water_mash.unwrap_or(0.0),
            sparge: row.water_sparge.unwrap_or(0.0),
            total: row.water_total.unwrap_or(0.0),
        },
        mash_time: row.mash_time.unwrap_or(0.0),
        mash_temp: row.mash_temp.unwrap_or(0.0),
        boil_time: row.boil_time.unwrap_or(0.0),
        yeast: Yeast {
            name: row.yeast_name.unwrap_or_default(),
            amount: row.yeast_amount.unwrap_or_default(),
            temperature: row.yeast_temp.unwrap_or(0.0),
        },
        original_gravity: row.original_gravity.unwrap_or(0.0),
        final_gravity: row.final_gravity.unwrap_or(0.0),
        abv: row.abv.unwrap_or(0.0),
        ibu: row.ibu.unwrap_or(0.0),
        srm: row.srm.unwrap_or(0.0),
        additional_notes: row.additional_notes.unwrap_or_default(),
        image_url: row.image_url.unwrap_or_default(),
        created_at: row.created_at,
    }
}

fn grain_bill(row: GrainRow) -> GrainBill {
    GrainBill {
        grain_name: row.grain_name.unwrap_or_default(),
        amount: row.amount.unwrap_or(0.0),
        percentage: row.percentage.unwrap_or(0.0),
    }
}

fn hop_addition(row: HopRow) -> HopAddition {
    let usage = row.usage.unwrap_or_default();
    HopAddition {
        hop_name: row.hop_name.unwrap_or_default(),
        amount: row.amount.unwrap_or(0.0),
        time: row.time.unwrap_or(0.0),
        usage_badge: usage_badge(&usage),
        usage,
    }
}

fn extra_ingredient(row: IngredientRow) -> ExtraIngredient {
    ExtraIngredient {
        ingredient_name: row.ingredient_name.unwrap_or_default(),
        amount: row.amount.unwrap_or_default(),
        timing: row.timing.unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn bare_row() -> BeerRecipeRow {
        BeerRecipeRow {
            id: 1,
            title: "Farmhouse Saison".into(),
            description: None,
            style: None,
            difficulty: "Intermediate".into(),
            water_mash: None,
            water_sparge: None,
            water_total: None,
            mash_time: None,
            mash_temp: None,
            boil_time: None,
            yeast_name: None,
            yeast_amount: None,
            yeast_temp: None,
            original_gravity: None,
            final_gravity: None,
            abv: None,
            ibu: None,
            srm: None,
            additional_notes: None,
            image_url: None,
            created_at: datetime!(2024-03-10 9:00 UTC),
        }
    }

    #[test]
    fn every_absent_field_gets_its_default() {
        let recipe = normalize(bare_row(), vec![], vec![], vec![]);

        assert_eq!(recipe.id, 1);
        assert_eq!(recipe.title, "Farmhouse Saison");
        assert_eq!(recipe.difficulty, "Intermediate");
        assert_eq!(recipe.description, "");
        assert_eq!(recipe.style, "");
        assert_eq!(
            recipe.water_amount,
            WaterAmount {
                mash: 0.0,
                sparge: 0.0,
                total: 0.0
            }
        );
        assert_eq!(
            recipe.yeast,
            Yeast {
                name: String::new(),
                amount: String::new(),
                temperature: 0.0
            }
        );
        assert!(recipe.grains.is_empty());
        assert!(recipe.hops.is_empty());
        assert!(recipe.additional_ingredients.is_empty());
        assert_eq!(recipe.mash_time, 0.0);
        assert_eq!(recipe.mash_temp, 0.0);
        assert_eq!(recipe.boil_time, 0.0);
        assert_eq!(recipe.original_gravity, 0.0);
        assert_eq!(recipe.final_gravity, 0.0);
        assert_eq!(recipe.abv, 0.0);
        assert_eq!(recipe.ibu, 0.0);
        assert_eq!(recipe.srm, 0.0);
        assert_eq!(recipe.additional_notes, "");
        assert_eq!(recipe.image_url, "");
    }

    #[test]
    fn present_values_pass_through_unchanged() {
        let mut row = bare_row();
        row.style = Some("Saison".into());
        row.water_mash = Some(14.5);
        row.water_sparge = Some(10.0);
        row.water_total = Some(24.5);
        row.original_gravity = Some(1.052);
        row.srm = Some(4.2);

        let grains = vec![GrainRow {
            recipe_id: 1,
            grain_name: Some("Pilsner Malt".into()),
            amount: Some(4.5),
            percentage: Some(85.0),
        }];

        let recipe = normalize(row, grains, vec![], vec![]);
        assert_eq!(recipe.style, "Saison");
        assert_eq!(recipe.water_amount.total, 24.5);
        assert_eq!(recipe.original_gravity, 1.052);
        assert_eq!(recipe.srm, 4.2);
        assert_eq!(recipe.grains.len(), 1);
        assert_eq!(recipe.grains[0].grain_name, "Pilsner Malt");
        assert_eq!(recipe.grains[0].percentage, 85.0);
    }

    #[test]
    fn normalization_is_idempotent() {
        let first = normalize(bare_row(), vec![], vec![], vec![]);

        // Reinterpret the defaulted output as a raw row and run it through
        // again; defaulting a default must be a no-op.
        let round_trip = BeerRecipeRow {
            id: first.id,
            title: first.title.clone(),
            description: Some(first.description.clone()),
            style: Some(first.style.clone()),
            difficulty: first.difficulty.clone(),
            water_mash: Some(first.water_amount.mash),
            water_sparge: Some(first.water_amount.sparge),
            water_total: Some(first.water_amount.total),
            mash_time: Some(first.mash_time),
            mash_temp: Some(first.mash_temp),
            boil_time: Some(first.boil_time),
            yeast_name: Some(first.yeast.name.clone()),
            yeast_amount: Some(first.yeast.amount.clone()),
            yeast_temp: Some(first.yeast.temperature),
            original_gravity: Some(first.original_gravity),
            final_gravity: Some(first.final_gravity),
            abv: Some(first.abv),
            ibu: Some(first.ibu),
            srm: Some(first.srm),
            additional_notes: Some(first.additional_notes.clone()),
            image_url: Some(first.image_url.clone()),
            created_at: first.created_at,
        };

        let second = normalize(round_trip, vec![], vec![], vec![]);
        assert_eq!(first, second);
    }

    #[test]
    fn partial_child_rows_are_defaulted_too() {
        let hops = vec![HopRow {
            recipe_id: 1,
            hop_name: Some("Saaz".into()),
            amount: None,
            time: None,
            usage: None,
        }];
        let recipe = normalize(bare_row(), vec![], hops, vec![]);
        assert_eq!(recipe.hops[0].hop_name, "Saaz");
        assert_eq!(recipe.hops[0].amount, 0.0);
        assert_eq!(recipe.hops[0].time, 0.0);
        assert_eq!(recipe.hops[0].usage, "");
        assert_eq!(recipe.hops[0].usage_badge, "bg-gray-100 text-gray-800");
    }

    #[test]
    fn hop_usage_carries_its_badge() {
        let hops = vec![
            HopRow {
                recipe_id: 1,
                hop_name: Some("Magnum".into()),
                amount: Some(1.0),
                time: Some(60.0),
                usage: Some("Boil".into()),
            },
            HopRow {
                recipe_id: 1,
                hop_name: Some("Citra".into()),
                amount: Some(2.0),
                time: Some(0.0),
                usage: Some("Dry Hop".into()),
            },
        ];
        let recipe = normalize(bare_row(), vec![], hops, vec![]);
        assert_eq!(recipe.hops[0].usage_badge, "bg-blue-100 text-blue-800");
        assert_eq!(recipe.hops[1].usage_badge, "bg-green-100 text-green-800");
    }
}
