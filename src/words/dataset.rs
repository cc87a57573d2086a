//! Embedded word dataset.
//!
//! Compiled into the binary so the game works offline. Entries are
//! `(id, word, definition, difficulty)`; words are lowercase ASCII and ids
//! are unique. Lengths deliberately span the whole fuzzy-tolerance range,
//! from three-letter words (exact match only) to long hard-tier words.

use crate::core::Difficulty;

pub(super) const WORDS: &[(u32, &str, &str, Difficulty)] = &[
    // Easy
    (1, "sun", "the star at the center of our solar system", Difficulty::Easy),
    (2, "map", "a flat drawing of an area showing roads, towns, and physical features", Difficulty::Easy),
    (3, "ice", "water frozen solid by cold", Difficulty::Easy),
    (4, "cat", "a small whiskered feline kept as a pet", Difficulty::Easy),
    (5, "book", "a set of printed pages bound together for reading", Difficulty::Easy),
    (6, "rain", "water falling in drops from clouds", Difficulty::Easy),
    (7, "door", "a hinged barrier used to close off an entrance", Difficulty::Easy),
    (8, "bread", "a staple food baked from flour, water, and usually yeast", Difficulty::Easy),
    (9, "house", "a building where people live", Difficulty::Easy),
    (10, "water", "the clear liquid that falls as rain and fills rivers and seas", Difficulty::Easy),
    (11, "apple", "a round fruit with crisp flesh and red, green, or yellow skin", Difficulty::Easy),
    (12, "chair", "a seat with a back, made for one person", Difficulty::Easy),
    (13, "smile", "a pleased expression with upturned corners of the mouth", Difficulty::Easy),
    (14, "garden", "a plot of ground where flowers or vegetables are grown", Difficulty::Easy),
    (15, "window", "an opening in a wall fitted with glass to let in light", Difficulty::Easy),
    (16, "yellow", "the color of ripe lemons and sunflowers", Difficulty::Easy),
    (17, "pencil", "a writing instrument with a thin graphite core", Difficulty::Easy),
    (18, "summer", "the warmest season of the year", Difficulty::Easy),
    // Medium
    (19, "river", "a large natural stream of water flowing to the sea", Difficulty::Medium),
    (20, "planet", "a large round body orbiting a star", Difficulty::Medium),
    (21, "bridge", "a structure carrying a road or path across an obstacle", Difficulty::Medium),
    (22, "castle", "a large fortified residence of the middle ages", Difficulty::Medium),
    (23, "example", "a thing characteristic of its kind, used to illustrate a rule", Difficulty::Medium),
    (24, "journey", "an act of traveling from one place to another", Difficulty::Medium),
    (25, "library", "a building housing a collection of books for public use", Difficulty::Medium),
    (26, "harvest", "the gathering in of ripened crops", Difficulty::Medium),
    (27, "volcano", "a mountain that erupts molten rock and ash", Difficulty::Medium),
    (28, "whisper", "to speak very softly, using breath rather than voice", Difficulty::Medium),
    (29, "compass", "an instrument that shows the direction of magnetic north", Difficulty::Medium),
    (30, "lantern", "a portable case protecting a light or flame inside", Difficulty::Medium),
    (31, "mountain", "a very high natural elevation of the earth's surface", Difficulty::Medium),
    (32, "umbrella", "a folding canopy carried for protection against rain", Difficulty::Medium),
    (33, "sandwich", "two slices of bread with a filling between them", Difficulty::Medium),
    (34, "treasure", "a store of precious metals, gems, or other valuables", Difficulty::Medium),
    (35, "calendar", "a chart showing the days, weeks, and months of a year", Difficulty::Medium),
    (36, "festival", "a day or period of public celebration", Difficulty::Medium),
    // Hard
    (37, "landscape", "all the visible features of an area of land", Difficulty::Hard),
    (38, "adventure", "an unusual, exciting, and possibly risky experience", Difficulty::Hard),
    (39, "telescope", "an optical instrument for viewing distant objects", Difficulty::Hard),
    (40, "xylophone", "a percussion instrument of wooden bars struck with mallets", Difficulty::Hard),
    (41, "chronicle", "a written account of events in the order they happened", Difficulty::Hard),
    (42, "labyrinth", "a complicated, irregular network of passages", Difficulty::Hard),
    (43, "avalanche", "a mass of snow and ice falling rapidly down a mountainside", Difficulty::Hard),
    (44, "ephemeral", "lasting for a very short time", Difficulty::Hard),
    (45, "university", "an institution of higher learning that grants degrees", Difficulty::Hard),
    (46, "lighthouse", "a tower with a beacon light to warn or guide ships", Difficulty::Hard),
    (47, "melancholy", "a feeling of pensive sadness with no obvious cause", Difficulty::Hard),
    (48, "silhouette", "a dark outline seen against a brighter background", Difficulty::Hard),
    (49, "quarantine", "a period of isolation to stop a disease from spreading", Difficulty::Hard),
    (50, "archipelago", "an extensive group of islands", Difficulty::Hard),
    (51, "encyclopedia", "a reference work with articles on many branches of knowledge", Difficulty::Hard),
    (52, "hippopotamus", "a large thick-skinned semiaquatic african mammal", Difficulty::Hard),
    (53, "constellation", "a recognized group of stars forming a pattern in the sky", Difficulty::Hard),
    (54, "metamorphosis", "a complete transformation, as of a caterpillar into a butterfly", Difficulty::Hard),
];
