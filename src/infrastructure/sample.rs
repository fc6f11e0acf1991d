//! Built-in sample catalog of places around Warm Springs, Fremont.

use crate::domain::Place;

/// `(name, category, subcategory, distance, website)` in load order.
const SAMPLE: &[(&str, &str, &str, f64, &str)] = &[
    ("Teaspoon Boba", "Food", "Boba", 0.5, "www.teaspoon.com"),
    ("Rose Tea Boba", "Food", "Boba", 0.4, "www.roseteaboba.com"),
    ("Paris Baguette", "Food", "Bakery", 1.2, "www.parisbaguette.com"),
    ("Carls Jr", "Food", "Fast Food", 1.5, "www.carlsjr.com"),
    ("Guma Gumalu", "Food", "Restaurant", 2.0, "www.gumagumalu.com"),
    ("Donut Place", "Food", "Bakery", 0.3, "www.donutplace.com"),
    ("M Dumplings", "Food", "Restaurant", 1.0, "www.mdumplings.com"),
    ("Success Hair Services", "Services", "Braiding and natural hair care", 1.0, "www.successhairservices"),
    ("Wells Fargo", "Services", "Bank", 0.2, "www.wellsfargo.com"),
    ("Warm Springs BART", "Services", "Transportation", 0.3, "www.bart.gov"),
    ("Milpitas BART", "Services", "Transportation", 2.5, "www.bart.gov"),
    ("Lake Elizabeth", "Nature & Parks", "Park", 1.8, "www.lakeelizabethpark.com"),
    ("Round1 Bowling & Amusement", "Shopping & Entertainment", "Arcade, bowling, karaoke", 0.6, "www.round1usa.com"),
    ("Dave & Buster’s", "Shopping & Entertainment", "Games, food, sports bar", 1.0, "www.daveandbusters.com"),
    ("Color Me Mine Fremont", "Shopping & Entertainment", "Paint-your-own pottery", 1.2, "www.colormemine.com"),
    ("The Art Beat Milpitas", "Shopping & Entertainment", "Art classes and creative workshops", 1.3, "www.theartbeatmilpitas.com"),
    ("Fremont Main Library", "Services", "Quiet study, reading, events", 1.4, "www.fremontlibrary.org"),
    ("Milpitas Library", "Services", "Spacious library, Wi-Fi, programs", 1.5, "www.santaclaracounty.gov"),
    ("Pacific Commons", "Shopping & Entertainment", "Outdoor mall with shops & dining", 1.6, "www.pacificcommons.com"),
    ("Fremont Hub", "Shopping & Entertainment", "Trader Joe’s, Marshalls, and more", 1.7, "www.fremonthub.com"),
    ("Great Mall", "Shopping & Entertainment", "Indoor outlet with top brands", 1.8, "www.greatmall.com"),
    ("Warm Springs Plaza", "Shopping & Entertainment", "Small plaza with Asian eats", 2.0, "www.warmspringsplaza.com"),
    ("Gateway Plaza", "Shopping & Entertainment", "Food, dessert, gym spots", 2.2, "www.gatewayplazamilpitas.com"),
    ("Auto Mall Parkway Retail Area", "Shopping & Entertainment", "Restaurants, services", 2.3, "www.automallparkway.com"),
    ("Mission Peak Regional Preserve", "Nature & Parks", "Epic hiking and views", 3.0, "www.park.ca.gov"),
    ("Lake Elizabeth / Central Park", "Nature & Parks", "Paddle boats, walks, chill", 2.5, "www.fremont.gov"),
    ("Alviso Marina County Park", "Nature & Parks", "Wetlands, bird watching", 2.7, "www.alvisomarina.com"),
    ("Coyote Creek Trail", "Nature & Parks", "Bike/walk trail through nature", 2.8, "www.coyotecreektrail.com"),
    ("Rose Tea Spot", "Drinks/Cafe", "Rose milk tea, boba", 1.0, "www.roseteaspot.com"),
    ("Happy Lemon", "Drinks/Cafe", "Bubble tea with salted cheese foam", 1.1, "www.happylemonusa.com"),
    ("Gong Cha", "Drinks/Cafe", "Taiwan-based boba chain", 1.2, "www.gongcha.com"),
    ("85°C Bakery Café", "Drinks/Cafe", "Sea salt coffee, taro bread", 1.3, "www.85cafe.com"),
    ("Tea Top", "Drinks/Cafe", "Taiwan tea drinks", 1.4, "www.teatop.com"),
    ("TP Tea", "Drinks/Cafe", "Premium tea-based drinks", 1.5, "www.tptea.com"),
    ("T4", "Drinks/Cafe", "Taiwanese boba and snacks", 1.6, "www.t4.com"),
    ("Sharetea", "Drinks/Cafe", "Classic milk and fruit teas", 1.7, "www.sharetea.com"),
    ("Yi Fang Taiwan Fruit Tea", "Drinks/Cafe", "Fruity, refreshing boba", 1.8, "www.yifangus.com"),
    ("Old Taro", "Drinks/Cafe", "Niche taro-based tea drinks", 1.9, "www.oldtaro.com"),
    ("Amami Sushi", "Food", "General", 2.0, "www.amamisushi.com"),
    ("Toro Sushi Stone Grill & Bar", "Food", "General", 2.1, "www.torosushigrill.com"),
    ("Kakuna Sushi", "Food", "General", 2.2, "www.kakunasushi.com"),
    ("Spoon Korean Bistro", "Food", "General", 2.3, "www.spoonkoreanbistro.com"),
    ("Wingstop", "Food", "General", 2.8, "www.wingstop.com"),
    ("Cold Stone Creamery", "Food", "General", 2.9, "www.coldstonecreamery.com"),
    ("McDonald's", "Food", "Fast Food", 3.0, "www.mcdonalds.com"),
    ("Mission San Jose", "Cultural Sites", "Historic Spanish mission with a rich history", 4.0, "www.missionsanjose.org"),
    ("Niles Essanay Silent Film Museum", "Places Nearby", "A historic site dedicated to silent films", 4.1, "www.nilessanay.org"),
    ("Fremont Cultural Arts Center", "Places Nearby", "Art exhibitions, cultural events", 4.2, "www.fremontartscenter.com"),
    ("Fremont Union Cemetery", "Places Nearby", "Historic cemetery, memorials, tours", 4.3, "www.fremontcemetery.com"),
    ("Boiling Point", "Food", "General", 1.5, "www.boilingpoint.com"),
];

/// The sample records as places, in load order.
pub fn sample_places() -> Vec<Place> {
    SAMPLE
        .iter()
        .map(|&(name, category, subcategory, distance, website)| Place {
            name: name.to_string(),
            category: category.to_string(),
            subcategory: subcategory.to_string(),
            distance,
            website: website.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_sample_when_validating_then_every_record_is_valid() {
        for place in sample_places() {
            assert!(
                Place::new(
                    place.name.clone(),
                    place.category.clone(),
                    place.subcategory.clone(),
                    place.distance,
                    place.website.clone()
                )
                .is_ok(),
                "invalid sample record: {}",
                place.name
            );
        }
    }
}
