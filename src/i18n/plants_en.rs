/// Common houseplant names offered to the suggestion filter (English).
pub const COMMON_HOUSEPLANTS: &[&str] = &[
    "African Violet",
    "Aloe Vera",
    "Anthurium",
    "Areca Palm",
    "Arrowhead Plant",
    "Asparagus Fern",
    "Baby Rubber Plant",
    "Bird of Paradise",
    "Boston Fern",
    "Calathea",
    "Chinese Evergreen",
    "Christmas Cactus",
    "Croton",
    "Dieffenbachia",
    "Dracaena",
    "Dragon Tree",
    "English Ivy",
    "Fiddle Leaf Fig",
    "Fittonia",
    "Golden Pothos",
    "Heart Leaf Philodendron",
    "Jade Plant",
    "Kentia Palm",
    "Lucky Bamboo",
    "Monstera Deliciosa",
    "Money Tree",
    "Peace Lily",
    "Philodendron Brasil",
    "Ponytail Palm",
    "Prayer Plant",
    "Rubber Plant",
    "Snake Plant",
    "Spider Plant",
    "String of Pearls",
    "Swiss Cheese Plant",
    "ZZ Plant",
    "Aglaonema",
    "Alocasia",
    "Begonia",
    "Bromeliad",
    "Cactus",
    "Cast Iron Plant",
    "Chinese Money Plant",
    "Coleus",
    "Corn Plant",
    "Cyclamen",
    "Devil's Ivy",
    "Elephant Ear",
    "Ficus",
    "Flamingo Flower",
    "Gardenia",
    "Geranium",
    "Hoya",
    "Impatiens",
    "Jasmine",
    "Kalanchoe",
    "Lavender",
    "Lemon Tree",
    "Lucky Bamboo",
    "Maidenhair Fern",
    "Ming Aralia",
    "Moth Orchid",
    "Nerve Plant",
    "Norfolk Island Pine",
    "Orchid",
    "Oxalis",
    "Parlor Palm",
    "Peperomia",
    "Persian Shield",
    "Polka Dot Plant",
    "Pothos",
    "Purple Heart",
    "Rattlesnake Plant",
    "Red Prayer Plant",
    "Rex Begonia",
    "Rosemary",
    "Sago Palm",
    "Schefflera",
    "Silver Pothos",
    "Split Leaf Philodendron",
    "Staghorn Fern",
    "String of Hearts",
    "Succulent",
    "Swiss Cheese Vine",
    "Ti Plant",
    "Tradescantia",
    "Umbrella Plant",
    "Venus Fly Trap",
    "Wandering Jew",
    "Watermelon Peperomia",
    "Wax Plant",
    "White Bird of Paradise",
    "Yucca",
    "Zebra Plant",
    "Air Plant",
    "Aluminum Plant",
    "Angel Wing Begonia",
    "Autumn Fern",
    "Baby Tears",
    "Bamboo Palm",
    "Bird's Nest Fern",
    "Blue Star Fern",
    "Button Fern",
    "Caladium",
    "Calla Lily",
    "Cebu Blue Pothos",
    "Chinese Fan Palm",
    "Christmas Palm",
    "Cordyline",
    "Creeping Fig",
    "Crown of Thorns",
    "Dumb Cane",
    "Elephant Bush",
    "Emerald Ripple Peperomia",
    "False Aralia",
    "Fiddle Leaf Fig",
    "Fishbone Cactus",
    "Flaming Katy",
    "Frosty Fern",
    "Garden Croton",
    "Gold Dust Croton",
    "Golden Barrel Cactus",
    "Golden Pothos",
    "Grape Ivy",
    "Green Prayer Plant",
    "Hawaiian Ti Plant",
    "Heart Fern",
    "Holly Fern",
    "Hoya Carnosa",
    "Japanese Aralia",
    "Jewel Orchid",
    "Jungle Velvet Calathea",
    "Kangaroo Paw Fern",
    "Laceleaf",
    "Lady Palm",
    "Lemon Button Fern",
    "Lemon Lime Dracaena",
    "Lemon Lime Philodendron",
    "Lucky Bamboo",
    "Madagascar Dragon Tree",
    "Majesty Palm",
    "Ming Fern",
    "Moon Cactus",
    "Mosaic Plant",
    "Mother of Thousands",
    "Nerve Plant",
    "Night Blooming Cereus",
    "Norfolk Island Pine",
    "Octopus Tree",
    "Orchid Cactus",
    "Oyster Plant",
    "Paddle Plant",
    "Painted Lady Echeveria",
    "Panda Plant",
    "Parlor Palm",
    "Peace Lily",
    "Pencil Cactus",
    "Peperomia Obtusifolia",
    "Persian Shield",
    "Piggyback Plant",
    "Pink Princess Philodendron",
    "Pinstripe Calathea",
    "Pitcher Plant",
    "Plumeria",
    "Polka Dot Begonia",
    "Ponytail Palm",
    "Prayer Plant",
    "Purple Passion Plant",
    "Purple Waffle Plant",
    "Rabbit's Foot Fern",
    "Rainbow Plant",
    "Red Aglaonema",
    "Red Prayer Plant",
    "Red Veined Prayer Plant",
    "Rex Begonia",
    "Rosemary",
    "Rubber Plant",
    "Sago Palm",
    "Satin Pothos",
    "Scindapsus",
    "Silver Dollar Plant",
    "Silver Pothos",
    "Snake Plant",
    "Spider Plant",
    "Split Leaf Philodendron",
    "Staghorn Fern",
    "String of Bananas",
    "String of Hearts",
    "String of Pearls",
    "String of Turtles",
    "Succulent",
    "Swiss Cheese Plant",
    "Swiss Cheese Vine",
    "Ti Plant",
    "Tradescantia",
    "Tree Philodendron",
    "Umbrella Plant",
    "Venus Fly Trap",
    "Wandering Jew",
    "Watermelon Peperomia",
    "Wax Plant",
    "White Bird of Paradise",
    "White Wizard Philodendron",
    "Yucca",
    "Zebra Plant",
    "Zebra Cactus",
    "Zebra Haworthia",
    "Zinnia",
    "ZZ Plant",
];
