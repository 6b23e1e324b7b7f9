//! Canned catalog used as an offline stand-in for the remote endpoint.

use crate::BeerRecord;

const SAMPLE_COUNT: u64 = 25;

const SAMPLE_NAME: &str =
    "SomeLongNameSomeLongNameSomeLongNameSomeLongNameSomeLongNameSomeLongName";

const SAMPLE_DESCRIPTION: &str = "It is important to express this very aspect in the packaging. \
Why stick to old norms when you don't need to? Before a wine enthusiast can even savour the \
content, the bottle already speaks volumes. We help you communicate this effectively. Based on \
the three classic shapes - the Bordeaux, the Burgundy and the Rhine wine bottle - a whole wealth \
of possibilities lies before you.\n\
The basic decision\n\
Your project starts with this basic decision. Legal and technical requirements present no \
obstacle. Optimum UV protection in our antique colour tone goes without saying. Perhaps other \
providers will tell you all this too. But things get really exciting when we start talking about \
shoulder height, bottom, embossing, reliefs and closure variants.\n\
In a league of its own\n\
As of this moment, you will notice that we are now playing in a completely different league - \
and will continue to do so until the perfect finishing has been achieved. And best of all, there \
is no obligation to place any kind of three-year order requirement. After all, we are \
specialists in the quantities YOU want. Anything from 1,000 units. Try us out!";

/// Build the sample catalog: 25 records with ids 1..=25.
///
/// Bitterness varies per record so grids and detail views have something to
/// show; the variation is deterministic so tests can rely on the output.
pub fn sample_records() -> Vec<BeerRecord> {
    (1..=SAMPLE_COUNT)
        .map(|id| BeerRecord {
            abv: 4.5,
            description: SAMPLE_DESCRIPTION.to_string(),
            ibu: (id as i64 * 37) % 101,
            id,
            image_url: "./images/mock_image.png".to_string(),
            name: SAMPLE_NAME.to_string(),
        })
        .collect()
}
