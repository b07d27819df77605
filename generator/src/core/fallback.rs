//! Deterministic year content used when every model has failed
//!
//! Nothing here touches the network and nothing can fail. The output is
//! generic but schema-complete, and every section names the year.

use shared::{
    decade_of, DailyLife, Fashion, Ideologies, MajorEvent, Memory, Music, MusicHit,
    StructuredContent, Technology,
};

/// Build minimal, schema-complete content for `year`
pub fn synthesize(year: u16) -> StructuredContent {
    let decade = decade_of(year);

    StructuredContent {
        introduction: format!(
            "Welcome to {year}. This snapshot of the {decade}s recalls how people in India lived, \
             worked and celebrated in {year}."
        ),
        music: Music {
            hits: vec![
                MusicHit {
                    title: format!("Film Songs of {year}"),
                    description: format!(
                        "Playback numbers from the cinema releases of {year} filled radios."
                    ),
                },
                MusicHit {
                    title: format!("Radio Favourites of {year}"),
                    description: format!(
                        "Request shows in {year} kept these tunes on heavy rotation."
                    ),
                },
                MusicHit {
                    title: format!("Wedding Season Hits of {year}"),
                    description: format!("Bands at {year} weddings played these crowd pleasers."),
                },
            ],
            trends: vec![
                format!("Film music dominated listening in {year}"),
                format!("Transistor radios carried new releases across towns in {year}"),
            ],
        },
        major_events: vec![
            MajorEvent {
                date: format!("January {year}"),
                title: format!("New Year {year}"),
                description: format!(
                    "Families welcomed {year} with gatherings and hopes for the months ahead."
                ),
            },
            MajorEvent {
                date: format!("August {year}"),
                title: format!("Independence Day {year}"),
                description: format!(
                    "Flag hoisting ceremonies were held across the country on 15 August {year}."
                ),
            },
        ],
        fashion: Fashion {
            mens: vec![format!("Tailored shirts and trousers were everyday wear in {year}")],
            womens: vec![format!(
                "Sarees and salwar kameez in fresh prints were popular in {year}"
            )],
            accessories: vec![format!("Wristwatches and handbags were prized purchases in {year}")],
        },
        ideologies: Ideologies {
            political: vec![format!("Public debate in {year} centred on national development")],
            social: vec![format!(
                "Joint families remained the backbone of community life in {year}"
            )],
            economic: vec![format!("Households in {year} saved carefully and valued steady jobs")],
        },
        technology: Technology {
            innovations: vec![format!(
                "Radio and print remained the main sources of news in {year}"
            )],
            daily_life: vec![format!("Household appliances slowly made chores easier in {year}")],
        },
        daily_life: DailyLife {
            morning: format!("Mornings in {year} began early with tea and the newspaper."),
            afternoon: format!("Afternoons in {year} were for work, school and the bazaar."),
            evening: format!("Evenings in {year} brought families together around the radio."),
            lifestyle: vec![
                format!("Weekend cinema outings were a highlight of {year}"),
                format!("Festivals in {year} were celebrated with neighbours"),
            ],
        },
        memories: vec![
            Memory {
                name: "Asha".to_string(),
                city: "Mumbai".to_string(),
                memory: format!(
                    "I still remember queuing for the biggest film of {year} with my cousins."
                ),
            },
            Memory {
                name: "Ravi".to_string(),
                city: "Delhi".to_string(),
                memory: format!(
                    "In {year} our whole street gathered to listen to the cricket commentary."
                ),
            },
        ],
    }
}
