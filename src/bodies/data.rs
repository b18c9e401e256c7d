//! Physical, orbital and educational data for every body.
//! Source: NASA planetary fact sheets, rounded for display.

use super::{
    Atmosphere, BodyId, BodyKind, CelestialBodyData, Discovery, Orbit, Temperature,
};

const ANCIENT: Discovery = Discovery {
    by: "Known since ancient times",
    date: "Ancient",
    method: "Naked eye observation",
};

const PREHISTORIC: Discovery = Discovery {
    by: "Known since prehistoric times",
    date: "Ancient",
    method: "Direct observation",
};

const fn telescope(by: &'static str, date: &'static str) -> Discovery {
    Discovery {
        by,
        date,
        method: "Telescope observation",
    }
}

const fn orbit(distance_au: f64, period_days: f64) -> Option<Orbit> {
    Some(Orbit {
        distance_au,
        period_days,
    })
}

const BLANK: CelestialBodyData = CelestialBodyData {
    id: BodyId::Sun,
    name: "",
    kind: BodyKind::Moon,
    radius_km: 0.0,
    mass_kg: 0.0,
    density: 0.0,
    gravity: 0.0,
    escape_velocity: 0.0,
    orbit: None,
    rotation_period_hours: 0.0,
    axial_tilt_deg: 0.0,
    eccentricity: None,
    atmosphere: None,
    description: "",
    key_facts: &[],
    fun_facts: &[],
    discovery: ANCIENT,
    earth_comparison: "",
    images: &[],
    video: "",
    has_rings: false,
    moons: &[],
};

/// Sun, planets in order from the Sun, then the major belt bodies.
pub static BODIES: &[CelestialBodyData] = &[
    SUN, MERCURY, VENUS, EARTH, MARS, JUPITER, SATURN, URANUS, NEPTUNE, CERES, VESTA, PALLAS,
    HYGIEA,
];

const SUN: CelestialBodyData = CelestialBodyData {
    id: BodyId::Sun,
    name: "The Sun",
    kind: BodyKind::Star,
    radius_km: 696_340.0,
    mass_kg: 1.989e30,
    density: 1.408,
    gravity: 274.0,
    escape_velocity: 617.5,
    // 25.38 days
    rotation_period_hours: 609.12,
    axial_tilt_deg: 7.25,
    atmosphere: Some(Atmosphere {
        composition: &[
            ("Hydrogen", 73.46),
            ("Helium", 24.85),
            ("Oxygen", 0.77),
            ("Carbon", 0.29),
            ("Iron", 0.16),
            ("Other", 0.47),
        ],
        pressure_atm: 0.0,
        temperature: Temperature {
            min: 5505.0,
            max: 15_000_000.0,
            average: 5778.0,
        },
    }),
    description: "The Sun is the star at the center of our Solar System. It is a nearly perfect sphere of hot plasma, heated to incandescence by nuclear fusion reactions in its core.",
    key_facts: &[
        "Contains 99.86% of the Solar System's mass",
        "Surface temperature: ~5,778 K (5,505°C)",
        "Core temperature: ~15 million°C",
        "Produces energy through nuclear fusion",
        "4.6 billion years old",
    ],
    fun_facts: &[
        "The Sun is so large that about 1.3 million Earths could fit inside it",
        "Light from the Sun takes about 8 minutes and 20 seconds to reach Earth",
        "The Sun generates enough energy every second to supply Earth's needs for 500,000 years",
        "The Sun's core is about 27 million degrees Fahrenheit (15 million Celsius)",
    ],
    discovery: PREHISTORIC,
    earth_comparison: "The Sun is 109 times wider than Earth and 333,000 times more massive",
    images: &["textures/sun/sun-surface.jpg", "textures/sun/sun-corona.jpg"],
    video: "PLACEHOLDER_SUN_VIDEO",
    ..BLANK
};

const MERCURY: CelestialBodyData = CelestialBodyData {
    id: BodyId::Mercury,
    name: "Mercury",
    kind: BodyKind::Planet,
    radius_km: 2439.7,
    mass_kg: 3.301e23,
    density: 5.427,
    gravity: 3.7,
    escape_velocity: 4.25,
    orbit: orbit(0.387, 88.0),
    rotation_period_hours: 1407.6,
    axial_tilt_deg: 0.034,
    eccentricity: Some(0.205),
    atmosphere: Some(Atmosphere {
        composition: &[
            ("Oxygen", 42.0),
            ("Sodium", 29.0),
            ("Hydrogen", 22.0),
            ("Helium", 6.0),
            ("Potassium", 0.5),
            ("Other", 0.5),
        ],
        pressure_atm: 1e-9,
        temperature: Temperature {
            min: -173.0,
            max: 427.0,
            average: 167.0,
        },
    }),
    description: "Mercury is the smallest planet in our solar system and the closest to the Sun. It has extreme temperature variations and no substantial atmosphere.",
    key_facts: &[
        "Closest planet to the Sun",
        "Smallest planet in the Solar System",
        "No atmosphere to retain heat",
        "Has a large iron core",
        "One day on Mercury lasts 176 Earth days",
    ],
    fun_facts: &[
        "Mercury is named after the Roman messenger god",
        "A year on Mercury is only 88 Earth days",
        "Mercury has no moons or rings",
        "It's the second densest planet after Earth",
    ],
    discovery: ANCIENT,
    earth_comparison: "Mercury is about 38% the size of Earth and has 38% of Earth's gravity",
    images: &["textures/mercury/surface.jpg", "textures/mercury/craters.jpg"],
    video: "PLACEHOLDER_MERCURY_VIDEO",
    ..BLANK
};

const VENUS: CelestialBodyData = CelestialBodyData {
    id: BodyId::Venus,
    name: "Venus",
    kind: BodyKind::Planet,
    radius_km: 6051.8,
    mass_kg: 4.867e24,
    density: 5.243,
    gravity: 8.87,
    escape_velocity: 10.36,
    orbit: orbit(0.723, 225.0),
    rotation_period_hours: -5832.5,
    axial_tilt_deg: 177.4,
    eccentricity: Some(0.007),
    atmosphere: Some(Atmosphere {
        composition: &[
            ("Carbon Dioxide", 96.5),
            ("Nitrogen", 3.5),
            ("Sulfur Dioxide", 0.015),
            ("Other", 0.005),
        ],
        pressure_atm: 92.0,
        temperature: Temperature {
            min: 450.0,
            max: 470.0,
            average: 462.0,
        },
    }),
    description: "Venus is the second planet from the Sun and is Earth's closest planetary neighbor. It has a thick, toxic atmosphere and is the hottest planet in our solar system.",
    key_facts: &[
        "Hottest planet in the Solar System",
        "Thick, toxic atmosphere",
        "Rotates backwards (retrograde)",
        "Often called Earth's \"twin\" due to similar size",
        "Surface pressure 92 times that of Earth",
    ],
    fun_facts: &[
        "Venus is sometimes called Earth's \"evil twin\"",
        "A day on Venus is longer than its year",
        "Venus has no moons or rings",
        "It's the brightest planet in our sky",
    ],
    discovery: ANCIENT,
    earth_comparison: "Venus is 95% the size of Earth but has a surface hot enough to melt lead",
    images: &["textures/venus/surface.jpg", "textures/venus/clouds.jpg"],
    video: "PLACEHOLDER_VENUS_VIDEO",
    ..BLANK
};

const EARTH: CelestialBodyData = CelestialBodyData {
    id: BodyId::Earth,
    name: "Earth",
    kind: BodyKind::Planet,
    radius_km: 6371.0,
    mass_kg: 5.972e24,
    density: 5.514,
    gravity: 9.807,
    escape_velocity: 11.19,
    orbit: orbit(1.0, 365.25),
    rotation_period_hours: 24.0,
    axial_tilt_deg: 23.44,
    eccentricity: Some(0.017),
    atmosphere: Some(Atmosphere {
        composition: &[
            ("Nitrogen", 78.08),
            ("Oxygen", 20.95),
            ("Argon", 0.93),
            ("Carbon Dioxide", 0.04),
            ("Other", 0.003),
        ],
        pressure_atm: 1.0,
        temperature: Temperature {
            min: -89.0,
            max: 58.0,
            average: 15.0,
        },
    }),
    description: "Earth is the third planet from the Sun and the only astronomical object known to harbor life. It has liquid water on its surface and a protective atmosphere.",
    key_facts: &[
        "Only known planet with life",
        "Liquid water covers 71% of surface",
        "Has one natural satellite (the Moon)",
        "Protective magnetic field",
        "Diverse climate zones and ecosystems",
    ],
    fun_facts: &[
        "Earth is the only planet not named after a god",
        "A day is actually 23 hours, 56 minutes, and 4 seconds",
        "Earth's core is as hot as the Sun's surface",
        "The Moon is gradually moving away from Earth",
    ],
    discovery: PREHISTORIC,
    earth_comparison: "Earth is our home planet and serves as the reference for comparing other worlds",
    images: &["textures/earth/blue-marble.jpg", "textures/earth/night-lights.jpg"],
    video: "PLACEHOLDER_EARTH_VIDEO",
    moons: &[CelestialBodyData {
        id: BodyId::Moon,
        name: "The Moon",
        radius_km: 1737.4,
        mass_kg: 7.342e22,
        density: 3.344,
        gravity: 1.62,
        escape_velocity: 2.38,
        orbit: orbit(1.0, 27.3),
        rotation_period_hours: 655.7,
        axial_tilt_deg: 6.68,
        description: "The Moon is Earth's only natural satellite and the fifth largest moon in the Solar System.",
        key_facts: &[
            "Fifth largest moon in the Solar System",
            "Tidally locked with Earth",
            "Influences Earth's tides",
            "Formed about 4.5 billion years ago",
            "No atmosphere or magnetic field",
        ],
        fun_facts: &[
            "The Moon is moving away from Earth at 3.8 cm per year",
            "Moon phases repeat every 29.5 days",
            "The Moon has moonquakes",
            "It would take 9 years to walk to the Moon",
        ],
        discovery: PREHISTORIC,
        earth_comparison: "The Moon is about 1/4 the size of Earth",
        images: &["textures/moon/full-moon.jpg", "textures/moon/lunar-surface.jpg"],
        video: "PLACEHOLDER_MOON_VIDEO",
        ..BLANK
    }],
    ..BLANK
};

const MARS: CelestialBodyData = CelestialBodyData {
    id: BodyId::Mars,
    name: "Mars",
    kind: BodyKind::Planet,
    radius_km: 3389.5,
    mass_kg: 6.417e23,
    density: 3.933,
    gravity: 3.71,
    escape_velocity: 5.03,
    orbit: orbit(1.524, 687.0),
    rotation_period_hours: 24.6,
    axial_tilt_deg: 25.19,
    eccentricity: Some(0.094),
    atmosphere: Some(Atmosphere {
        composition: &[
            ("Carbon Dioxide", 95.32),
            ("Nitrogen", 2.7),
            ("Argon", 1.6),
            ("Oxygen", 0.13),
            ("Other", 0.25),
        ],
        pressure_atm: 0.006,
        temperature: Temperature {
            min: -143.0,
            max: 35.0,
            average: -65.0,
        },
    }),
    description: "Mars is the fourth planet from the Sun and is often called the \"Red Planet\" due to iron oxide on its surface.",
    key_facts: &[
        "Known as the \"Red Planet\"",
        "Has the largest volcano in the Solar System (Olympus Mons)",
        "Home to the largest canyon (Valles Marineris)",
        "Has polar ice caps",
        "Day length similar to Earth",
    ],
    fun_facts: &[
        "Mars has the largest dust storms in the Solar System",
        "A day on Mars is 24 hours and 37 minutes",
        "Mars has two small moons: Phobos and Deimos",
        "The red color comes from iron oxide (rust)",
    ],
    discovery: ANCIENT,
    earth_comparison: "Mars is about half the size of Earth and has 38% of Earth's gravity",
    images: &["textures/mars/surface.jpg", "textures/mars/polar-caps.jpg"],
    video: "PLACEHOLDER_MARS_VIDEO",
    moons: &[
        CelestialBodyData {
            id: BodyId::Phobos,
            name: "Phobos",
            radius_km: 11.1,
            mass_kg: 1.0659e16,
            density: 1.876,
            gravity: 0.0057,
            escape_velocity: 0.0114,
            // 7.6 hours
            orbit: orbit(1.524, 0.32),
            rotation_period_hours: 7.6,
            description: "Phobos is the larger and inner moon of Mars, orbiting closer to its planet than any other moon in the solar system.",
            key_facts: &[
                "Largest moon of Mars",
                "Orbits Mars in just 7.6 hours",
                "Gradually spiraling into Mars",
                "Potato-shaped and heavily cratered",
                "Named after Greek god of fear",
            ],
            fun_facts: &[
                "Phobos rises in the west and sets in the east",
                "Will crash into Mars in about 50 million years",
                "Surface covered in regolith several meters thick",
                "Largest crater Stickney is nearly half its diameter",
            ],
            discovery: telescope("Asaph Hall", "1877"),
            earth_comparison: "Phobos is about 22 km across, much smaller than Earth's Moon",
            images: &["textures/phobos/surface.jpg"],
            video: "PLACEHOLDER_PHOBOS_VIDEO",
            ..BLANK
        },
        CelestialBodyData {
            id: BodyId::Deimos,
            name: "Deimos",
            radius_km: 6.2,
            mass_kg: 1.4762e15,
            density: 1.471,
            gravity: 0.003,
            escape_velocity: 0.0056,
            // 30.3 hours
            orbit: orbit(1.524, 1.26),
            rotation_period_hours: 30.3,
            description: "Deimos is the smaller and outer moon of Mars, with a more distant and stable orbit.",
            key_facts: &[
                "Smaller moon of Mars",
                "Orbits Mars in 30.3 hours",
                "More distant from Mars than Phobos",
                "Smoother surface than Phobos",
                "Named after Greek god of dread",
            ],
            fun_facts: &[
                "Deimos appears as a bright star from Mars surface",
                "Takes 2.7 Martian days to cross the sky",
                "May be a captured asteroid",
                "Surface gravity is 1/2500th of Earth's",
            ],
            discovery: telescope("Asaph Hall", "1877"),
            earth_comparison: "Deimos is only about 12 km across",
            images: &["textures/deimos/surface.jpg"],
            video: "PLACEHOLDER_DEIMOS_VIDEO",
            ..BLANK
        },
    ],
    ..BLANK
};

const JUPITER: CelestialBodyData = CelestialBodyData {
    id: BodyId::Jupiter,
    name: "Jupiter",
    kind: BodyKind::Planet,
    radius_km: 69_911.0,
    mass_kg: 1.898e27,
    density: 1.326,
    gravity: 24.79,
    escape_velocity: 59.5,
    orbit: orbit(5.204, 4333.0),
    rotation_period_hours: 9.9,
    axial_tilt_deg: 3.13,
    eccentricity: Some(0.049),
    atmosphere: Some(Atmosphere {
        composition: &[
            ("Hydrogen", 89.8),
            ("Helium", 10.2),
            ("Methane", 0.3),
            ("Ammonia", 0.026),
            ("Other", 0.003),
        ],
        pressure_atm: 1000.0,
        temperature: Temperature {
            min: -145.0,
            max: -110.0,
            average: -110.0,
        },
    }),
    description: "Jupiter is the largest planet in our solar system and is known for its Great Red Spot, a giant storm larger than Earth.",
    key_facts: &[
        "Largest planet in the Solar System",
        "Has the Great Red Spot storm",
        "More than 80 known moons",
        "Could fit all other planets inside it",
        "Acts as a \"cosmic vacuum cleaner\"",
    ],
    fun_facts: &[
        "Jupiter has more than twice the mass of all other planets combined",
        "A day on Jupiter is less than 10 hours",
        "Jupiter's Great Red Spot is shrinking",
        "Jupiter has faint rings made of dust",
    ],
    discovery: ANCIENT,
    earth_comparison: "Jupiter is 11 times wider than Earth and 318 times more massive",
    images: &["textures/jupiter/great-red-spot.jpg", "textures/jupiter/bands.jpg"],
    video: "PLACEHOLDER_JUPITER_VIDEO",
    has_rings: true,
    moons: &[
        CelestialBodyData {
            id: BodyId::Io,
            name: "Io",
            radius_km: 1821.6,
            mass_kg: 8.931e22,
            density: 3.528,
            gravity: 1.796,
            escape_velocity: 2.558,
            orbit: orbit(5.204, 1.77),
            rotation_period_hours: 42.5,
            description: "Io is the innermost Galilean moon of Jupiter and the most volcanically active body in the Solar System.",
            key_facts: &[
                "Most volcanically active body in Solar System",
                "Over 400 active volcanoes",
                "Innermost Galilean moon",
                "Tidally heated by Jupiter",
                "Sulfur-rich surface",
            ],
            fun_facts: &[
                "Volcanic plumes can reach 500 km high",
                "Surface completely renewed every million years",
                "No impact craters due to constant volcanic activity",
                "Yellow-orange color from sulfur compounds",
            ],
            discovery: telescope("Galileo Galilei", "1610"),
            earth_comparison: "Io is slightly larger than Earth's Moon",
            images: &["textures/io/volcanic.jpg"],
            video: "PLACEHOLDER_IO_VIDEO",
            ..BLANK
        },
        CelestialBodyData {
            id: BodyId::Europa,
            name: "Europa",
            radius_km: 1560.8,
            mass_kg: 4.799e22,
            density: 3.013,
            gravity: 1.314,
            escape_velocity: 2.025,
            orbit: orbit(5.204, 3.55),
            rotation_period_hours: 85.2,
            description: "Europa is Jupiter's fourth-largest moon and is thought to have a subsurface ocean beneath its icy crust.",
            key_facts: &[
                "Subsurface ocean beneath ice crust",
                "Potential for extraterrestrial life",
                "Smooth, young surface",
                "Made mostly of rock with water-ice crust",
                "Tidally locked to Jupiter",
            ],
            fun_facts: &[
                "Ocean may contain twice as much water as Earth's oceans",
                "Surface cracks suggest active geology",
                "Extremely thin oxygen atmosphere",
                "Prime target for astrobiology missions",
            ],
            discovery: telescope("Galileo Galilei", "1610"),
            earth_comparison: "Europa is slightly smaller than Earth's Moon",
            images: &["textures/europa/ice-surface.jpg"],
            video: "PLACEHOLDER_EUROPA_VIDEO",
            ..BLANK
        },
        CelestialBodyData {
            id: BodyId::Ganymede,
            name: "Ganymede",
            radius_km: 2634.1,
            mass_kg: 1.4819e23,
            density: 1.936,
            gravity: 1.428,
            escape_velocity: 2.741,
            orbit: orbit(5.204, 7.15),
            rotation_period_hours: 171.7,
            description: "Ganymede is the largest moon in the Solar System and the only moon known to have its own magnetic field.",
            key_facts: &[
                "Largest moon in the Solar System",
                "Larger than planet Mercury",
                "Has its own magnetic field",
                "Subsurface ocean",
                "Made of rock and water ice",
            ],
            fun_facts: &[
                "Only moon with its own magnetosphere",
                "Would be classified as a planet if it orbited the Sun",
                "Dark and light terrain regions",
                "Hubble detected water vapor in atmosphere",
            ],
            discovery: telescope("Galileo Galilei", "1610"),
            earth_comparison: "Ganymede is larger than Mercury and 1.5 times Earth's Moon",
            images: &["textures/ganymede/surface.jpg"],
            video: "PLACEHOLDER_GANYMEDE_VIDEO",
            ..BLANK
        },
        CelestialBodyData {
            id: BodyId::Callisto,
            name: "Callisto",
            radius_km: 2410.3,
            mass_kg: 1.075e23,
            density: 1.834,
            gravity: 1.235,
            escape_velocity: 2.440,
            orbit: orbit(5.204, 16.69),
            rotation_period_hours: 400.5,
            description: "Callisto is the outermost Galilean moon and the most heavily cratered object in the Solar System.",
            key_facts: &[
                "Most heavily cratered object in Solar System",
                "Outermost Galilean moon",
                "Ancient, unchanged surface",
                "Low density suggests ice-rock mixture",
                "Possible subsurface ocean",
            ],
            fun_facts: &[
                "Surface is 4 billion years old",
                "Giant Valhalla crater is 4,000 km across",
                "Least affected by Jupiter's radiation",
                "Potential base for future missions to Jupiter system",
            ],
            discovery: telescope("Galileo Galilei", "1610"),
            earth_comparison: "Callisto is almost as large as Mercury",
            images: &["textures/callisto/craters.jpg"],
            video: "PLACEHOLDER_CALLISTO_VIDEO",
            ..BLANK
        },
    ],
    ..BLANK
};

const SATURN: CelestialBodyData = CelestialBodyData {
    id: BodyId::Saturn,
    name: "Saturn",
    kind: BodyKind::Planet,
    radius_km: 58_232.0,
    mass_kg: 5.683e26,
    density: 0.687,
    gravity: 10.44,
    escape_velocity: 35.5,
    orbit: orbit(9.582, 10_759.0),
    rotation_period_hours: 10.7,
    axial_tilt_deg: 26.73,
    eccentricity: Some(0.052),
    atmosphere: Some(Atmosphere {
        composition: &[
            ("Hydrogen", 96.3),
            ("Helium", 3.25),
            ("Methane", 0.45),
            ("Ammonia", 0.0125),
            ("Other", 0.005),
        ],
        pressure_atm: 1000.0,
        temperature: Temperature {
            min: -185.0,
            max: -122.0,
            average: -140.0,
        },
    }),
    description: "Saturn is the sixth planet from the Sun and is famous for its spectacular ring system made of ice and rock particles.",
    key_facts: &[
        "Famous for its prominent ring system",
        "Less dense than water",
        "Has more than 80 known moons",
        "Titan is larger than Mercury",
        "Hexagonal storm at north pole",
    ],
    fun_facts: &[
        "Saturn would float in water if there was a bathtub big enough",
        "Saturn's rings are made mostly of water ice",
        "A day on Saturn is about 10.7 hours",
        "Saturn has a hexagonal-shaped storm at its north pole",
    ],
    discovery: ANCIENT,
    earth_comparison: "Saturn is 9 times wider than Earth but much less dense",
    images: &["textures/saturn/rings.jpg", "textures/saturn/hexagon.jpg"],
    video: "PLACEHOLDER_SATURN_VIDEO",
    has_rings: true,
    moons: &[
        CelestialBodyData {
            id: BodyId::Titan,
            name: "Titan",
            radius_km: 2574.0,
            mass_kg: 1.3452e23,
            density: 1.88,
            gravity: 1.352,
            escape_velocity: 2.639,
            orbit: orbit(9.582, 15.95),
            rotation_period_hours: 382.7,
            atmosphere: Some(Atmosphere {
                composition: &[
                    ("Nitrogen", 94.2),
                    ("Methane", 5.65),
                    ("Hydrogen", 0.1),
                    ("Other", 0.05),
                ],
                pressure_atm: 1.45,
                temperature: Temperature {
                    min: -179.0,
                    max: -179.0,
                    average: -179.0,
                },
            }),
            description: "Titan is Saturn's largest moon and the only moon in the Solar System with a substantial atmosphere.",
            key_facts: &[
                "Larger than planet Mercury",
                "Dense nitrogen atmosphere",
                "Lakes and rivers of liquid methane",
                "Complex organic chemistry",
                "Thick orange haze",
            ],
            fun_facts: &[
                "Only moon with a substantial atmosphere",
                "Methane cycle similar to Earth's water cycle",
                "Cassini-Huygens landed on its surface",
                "Possible prebiotic chemistry",
            ],
            discovery: telescope("Christiaan Huygens", "1655"),
            earth_comparison: "Titan is 50% larger than Earth's Moon and larger than Mercury",
            images: &["textures/titan/surface.jpg"],
            video: "PLACEHOLDER_TITAN_VIDEO",
            ..BLANK
        },
        CelestialBodyData {
            id: BodyId::Enceladus,
            name: "Enceladus",
            radius_km: 252.1,
            mass_kg: 1.08e20,
            density: 1.609,
            gravity: 0.0113,
            escape_velocity: 0.239,
            orbit: orbit(9.582, 1.37),
            rotation_period_hours: 32.9,
            description: "Enceladus is an icy moon of Saturn known for its water geysers erupting from its south pole.",
            key_facts: &[
                "Water geysers at south pole",
                "Subsurface ocean",
                "Highly reflective icy surface",
                "Geologically active",
                "Potential for life",
            ],
            fun_facts: &[
                "Geysers shoot water 500 km into space",
                "Warmest spot in outer solar system",
                "Tiger stripes at south pole",
                "Primary source of Saturn's E ring",
            ],
            discovery: telescope("William Herschel", "1789"),
            earth_comparison: "Enceladus is about 1/7th the size of Earth's Moon",
            images: &["textures/enceladus/geysers.jpg"],
            video: "PLACEHOLDER_ENCELADUS_VIDEO",
            ..BLANK
        },
        CelestialBodyData {
            id: BodyId::Mimas,
            name: "Mimas",
            radius_km: 198.2,
            mass_kg: 3.749e19,
            density: 1.149,
            gravity: 0.0648,
            escape_velocity: 0.159,
            orbit: orbit(9.582, 0.94),
            rotation_period_hours: 22.6,
            description: "Mimas is Saturn's innermost major moon, famous for its large Herschel crater that gives it a Death Star appearance.",
            key_facts: &[
                "Resembles the Death Star from Star Wars",
                "Giant Herschel crater",
                "Innermost major moon of Saturn",
                "Low density suggests mostly ice",
                "Helps clear the Cassini Division",
            ],
            fun_facts: &[
                "Herschel crater is 1/3 the diameter of Mimas",
                "Impact that created crater nearly destroyed moon",
                "Orbital resonance affects Saturn's rings",
                "Temperature varies from -200°C to -181°C",
            ],
            discovery: telescope("William Herschel", "1789"),
            earth_comparison: "Mimas is about 1/9th the size of Earth's Moon",
            images: &["textures/mimas/herschel-crater.jpg"],
            video: "PLACEHOLDER_MIMAS_VIDEO",
            ..BLANK
        },
        CelestialBodyData {
            id: BodyId::Iapetus,
            name: "Iapetus",
            radius_km: 734.5,
            mass_kg: 1.805e21,
            density: 1.088,
            gravity: 0.223,
            escape_velocity: 0.573,
            orbit: orbit(9.582, 79.32),
            rotation_period_hours: 1904.7,
            description: "Iapetus is Saturn's third-largest moon, famous for its two-tone coloration and equatorial ridge.",
            key_facts: &[
                "Two-tone coloration (light and dark)",
                "Massive equatorial ridge",
                "Walnut-like shape",
                "Very distant from Saturn",
                "Tidally locked",
            ],
            fun_facts: &[
                "Equatorial ridge is 20 km high in places",
                "Dark material may come from another moon",
                "One of the most distant regular moons",
                "Brightness varies dramatically during orbit",
            ],
            discovery: telescope("Giovanni Cassini", "1671"),
            earth_comparison: "Iapetus is about 2/5th the size of Earth's Moon",
            images: &["textures/iapetus/two-tone.jpg"],
            video: "PLACEHOLDER_IAPETUS_VIDEO",
            ..BLANK
        },
    ],
    ..BLANK
};

const URANUS: CelestialBodyData = CelestialBodyData {
    id: BodyId::Uranus,
    name: "Uranus",
    kind: BodyKind::Planet,
    radius_km: 25_362.0,
    mass_kg: 8.681e25,
    density: 1.27,
    gravity: 8.69,
    escape_velocity: 21.3,
    orbit: orbit(19.2, 30_687.0),
    rotation_period_hours: -17.2,
    axial_tilt_deg: 97.77,
    eccentricity: Some(0.046),
    atmosphere: Some(Atmosphere {
        composition: &[
            ("Hydrogen", 82.5),
            ("Helium", 15.2),
            ("Methane", 2.3),
            ("Other", 0.009),
        ],
        pressure_atm: 1000.0,
        temperature: Temperature {
            min: -224.0,
            max: -197.0,
            average: -197.0,
        },
    }),
    description: "Uranus is the seventh planet from the Sun and rotates on its side, making it unique among the planets.",
    key_facts: &[
        "Rotates on its side (97.77° tilt)",
        "Made of water, methane, and ammonia ices",
        "Has faint rings",
        "Coldest planetary atmosphere in Solar System",
        "Has 27 known moons",
    ],
    fun_facts: &[
        "Uranus spins on its side like a rolling ball",
        "A year on Uranus is 84 Earth years",
        "Uranus has the coldest atmosphere of any planet",
        "It rains diamonds on Uranus",
    ],
    discovery: telescope("William Herschel", "1781"),
    earth_comparison: "Uranus is 4 times wider than Earth and 14.5 times more massive",
    images: &["textures/uranus/blue-green.jpg", "textures/uranus/rings.jpg"],
    video: "PLACEHOLDER_URANUS_VIDEO",
    has_rings: true,
    moons: &[
        CelestialBodyData {
            id: BodyId::Titania,
            name: "Titania",
            radius_km: 788.4,
            mass_kg: 3.527e21,
            density: 1.711,
            gravity: 0.379,
            escape_velocity: 0.773,
            orbit: orbit(19.2, 8.71),
            rotation_period_hours: 208.9,
            description: "Titania is the largest moon of Uranus and was named after the queen of the fairies in Shakespeare's A Midsummer Night's Dream.",
            key_facts: &[
                "Largest moon of Uranus",
                "Named after Shakespeare character",
                "Ice and rock composition",
                "Evidence of past geological activity",
                "Discovered by William Herschel",
            ],
            fun_facts: &[
                "Less than half the size of Earth's Moon",
                "Surface shows evidence of tectonic activity",
                "Composed of roughly equal amounts of ice and rock",
                "Has a reddish tint due to organic compounds",
            ],
            discovery: telescope("William Herschel", "1787"),
            earth_comparison: "Titania is about half the size of Earth's Moon",
            images: &["textures/titania/surface.jpg"],
            video: "PLACEHOLDER_TITANIA_VIDEO",
            ..BLANK
        },
        CelestialBodyData {
            id: BodyId::Oberon,
            name: "Oberon",
            radius_km: 761.4,
            mass_kg: 3.014e21,
            density: 1.563,
            gravity: 0.346,
            escape_velocity: 0.726,
            orbit: orbit(19.2, 13.46),
            rotation_period_hours: 323.1,
            description: "Oberon is the second-largest and outermost major moon of Uranus, named after the king of the fairies in Shakespeare.",
            key_facts: &[
                "Second-largest moon of Uranus",
                "Outermost major moon",
                "Named after Shakespeare character",
                "Dark, heavily cratered surface",
                "Mixture of ice and rock",
            ],
            fun_facts: &[
                "Surface is very dark, reflecting only 14% of sunlight",
                "Has several large impact craters",
                "Shows evidence of ancient geological activity",
                "Composed of roughly 50% ice and 50% rock",
            ],
            discovery: telescope("William Herschel", "1787"),
            earth_comparison: "Oberon is slightly smaller than Titania",
            images: &["textures/oberon/craters.jpg"],
            video: "PLACEHOLDER_OBERON_VIDEO",
            ..BLANK
        },
        CelestialBodyData {
            id: BodyId::Ariel,
            name: "Ariel",
            radius_km: 578.9,
            mass_kg: 1.353e21,
            density: 1.592,
            gravity: 0.269,
            escape_velocity: 0.558,
            orbit: orbit(19.2, 2.52),
            rotation_period_hours: 60.5,
            description: "Ariel is the fourth-largest moon of Uranus and has the brightest and youngest surface of all Uranian moons.",
            key_facts: &[
                "Brightest surface of Uranian moons",
                "Youngest-looking surface",
                "Named after Shakespeare character",
                "Evidence of recent geological activity",
                "Extensive system of canyons",
            ],
            fun_facts: &[
                "Surface shows evidence of recent resurfacing",
                "Has extensive fault systems and canyons",
                "Relatively crater-free surface",
                "May have had geological activity in the past",
            ],
            discovery: telescope("William Lassell", "1851"),
            earth_comparison: "Ariel is about 1/3rd the size of Earth's Moon",
            images: &["textures/ariel/canyons.jpg"],
            video: "PLACEHOLDER_ARIEL_VIDEO",
            ..BLANK
        },
        CelestialBodyData {
            id: BodyId::Umbriel,
            name: "Umbriel",
            radius_km: 584.7,
            mass_kg: 1.172e21,
            density: 1.39,
            gravity: 0.234,
            escape_velocity: 0.520,
            orbit: orbit(19.2, 4.14),
            rotation_period_hours: 99.5,
            description: "Umbriel is the darkest moon of Uranus and shows little evidence of geological activity.",
            key_facts: &[
                "Darkest moon of Uranus",
                "Ancient, heavily cratered surface",
                "Named after character from Alexander Pope",
                "Little geological activity",
                "Uniform dark surface",
            ],
            fun_facts: &[
                "Surface reflects only 16% of sunlight",
                "Ancient surface with many impact craters",
                "Shows little evidence of internal activity",
                "Has a mysterious bright ring called Wunda",
            ],
            discovery: telescope("William Lassell", "1851"),
            earth_comparison: "Umbriel is similar in size to Ariel",
            images: &["textures/umbriel/dark-surface.jpg"],
            video: "PLACEHOLDER_UMBRIEL_VIDEO",
            ..BLANK
        },
        CelestialBodyData {
            id: BodyId::Miranda,
            name: "Miranda",
            radius_km: 235.8,
            mass_kg: 6.59e19,
            density: 1.20,
            gravity: 0.079,
            escape_velocity: 0.193,
            orbit: orbit(19.2, 1.41),
            rotation_period_hours: 33.9,
            description: "Miranda is the smallest and innermost of Uranus's major moons, with a patchwork surface of different terrains.",
            key_facts: &[
                "Smallest major moon of Uranus",
                "Bizarre patchwork surface",
                "Extreme geological features",
                "Named after Shakespeare character",
                "May have been shattered and reassembled",
            ],
            fun_facts: &[
                "Most bizarre and varied terrain in solar system",
                "Has cliffs 20 km high",
                "May have been broken apart and reformed",
                "Surface shows signs of extreme tidal heating",
            ],
            discovery: telescope("Gerard Kuiper", "1948"),
            earth_comparison: "Miranda is about 1/7th the size of Earth's Moon",
            images: &["textures/miranda/patchwork.jpg"],
            video: "PLACEHOLDER_MIRANDA_VIDEO",
            ..BLANK
        },
    ],
    ..BLANK
};

const NEPTUNE: CelestialBodyData = CelestialBodyData {
    id: BodyId::Neptune,
    name: "Neptune",
    kind: BodyKind::Planet,
    radius_km: 24_622.0,
    mass_kg: 1.024e26,
    density: 1.638,
    gravity: 11.15,
    escape_velocity: 23.5,
    orbit: orbit(30.05, 60_190.0),
    rotation_period_hours: 16.1,
    axial_tilt_deg: 28.32,
    eccentricity: Some(0.009),
    atmosphere: Some(Atmosphere {
        composition: &[
            ("Hydrogen", 80.0),
            ("Helium", 19.0),
            ("Methane", 1.0),
            ("Deuteride", 0.019),
        ],
        pressure_atm: 1000.0,
        temperature: Temperature {
            min: -218.0,
            max: -200.0,
            average: -200.0,
        },
    }),
    description: "Neptune is the eighth and outermost planet in our solar system, known for its deep blue color and extreme winds.",
    key_facts: &[
        "Farthest planet from the Sun",
        "Windiest planet with speeds up to 2,100 km/h",
        "Deep blue color from methane",
        "Has 14 known moons",
        "Takes 165 Earth years to orbit the Sun",
    ],
    fun_facts: &[
        "Neptune was the first planet discovered through mathematical prediction",
        "Neptune has the fastest winds in the Solar System",
        "A year on Neptune is 165 Earth years",
        "Neptune's largest moon, Triton, orbits backwards",
    ],
    discovery: Discovery {
        by: "Urbain Le Verrier & John Couch Adams",
        date: "1846",
        method: "Mathematical prediction",
    },
    earth_comparison: "Neptune is 4 times wider than Earth and 17 times more massive",
    images: &["textures/neptune/deep-blue.jpg", "textures/neptune/storms.jpg"],
    video: "PLACEHOLDER_NEPTUNE_VIDEO",
    has_rings: true,
    moons: &[CelestialBodyData {
        id: BodyId::Triton,
        name: "Triton",
        radius_km: 1353.4,
        mass_kg: 2.139e22,
        density: 2.061,
        gravity: 0.779,
        escape_velocity: 1.455,
        // Retrograde orbit
        orbit: orbit(30.05, -5.88),
        rotation_period_hours: -141.0,
        atmosphere: Some(Atmosphere {
            composition: &[("Nitrogen", 99.9), ("Methane", 0.1)],
            pressure_atm: 0.000014,
            temperature: Temperature {
                min: -235.0,
                max: -235.0,
                average: -235.0,
            },
        }),
        description: "Triton is Neptune's largest moon and the only large moon in the Solar System with a retrograde orbit.",
        key_facts: &[
            "Largest moon of Neptune",
            "Retrograde orbit (orbits backwards)",
            "Likely a captured Kuiper Belt object",
            "Thin nitrogen atmosphere",
            "Geysers of nitrogen",
        ],
        fun_facts: &[
            "Nitrogen geysers erupt 8 km high",
            "Coldest object ever visited by spacecraft",
            "Probably captured from Kuiper Belt",
            "Will eventually crash into Neptune",
        ],
        discovery: telescope("William Lassell", "1846"),
        earth_comparison: "Triton is about 3/4 the size of Earth's Moon",
        images: &["textures/triton/geysers.jpg"],
        video: "PLACEHOLDER_TRITON_VIDEO",
        ..BLANK
    }],
    ..BLANK
};

const CERES: CelestialBodyData = CelestialBodyData {
    id: BodyId::Ceres,
    name: "Ceres",
    kind: BodyKind::DwarfPlanet,
    radius_km: 473.0,
    mass_kg: 9.393e20,
    density: 2.161,
    gravity: 0.27,
    escape_velocity: 0.51,
    orbit: orbit(2.77, 1682.0),
    rotation_period_hours: 9.1,
    axial_tilt_deg: 4.0,
    description: "Ceres is the largest object in the asteroid belt between Mars and Jupiter, and the only dwarf planet in the inner solar system.",
    key_facts: &[
        "Largest object in the asteroid belt",
        "Only dwarf planet in the inner solar system",
        "Contains about 25% of the asteroid belt's total mass",
        "Discovered in 1801 by Giuseppe Piazzi",
        "Visited by NASA's Dawn spacecraft (2015-2018)",
    ],
    fun_facts: &[
        "Named after the Roman goddess of agriculture",
        "Contains water ice in its subsurface",
        "Has a thin water vapor atmosphere",
        "May have a subsurface ocean",
    ],
    discovery: telescope("Giuseppe Piazzi", "1801"),
    earth_comparison: "Ceres is about 1/13th the diameter of Earth",
    images: &["textures/asteroids/ceres.jpg"],
    ..BLANK
};

const VESTA: CelestialBodyData = CelestialBodyData {
    id: BodyId::Vesta,
    name: "Vesta",
    kind: BodyKind::Asteroid,
    radius_km: 263.0,
    mass_kg: 2.59e20,
    density: 3.456,
    gravity: 0.22,
    escape_velocity: 0.36,
    orbit: orbit(2.36, 1326.0),
    rotation_period_hours: 5.3,
    axial_tilt_deg: 27.0,
    description: "Vesta is the second-most massive body in the asteroid belt, accounting for about 9% of the belt's total mass.",
    key_facts: &[
        "Second-most massive body in the asteroid belt",
        "Accounts for about 9% of the belt's mass",
        "Has a basaltic surface with a large impact crater",
        "Visited by NASA's Dawn spacecraft (2011-2012)",
        "Differentiated body with a metallic core",
    ],
    fun_facts: &[
        "Has a massive impact crater called Rheasilvia",
        "Is the source of HED meteorites that fall to Earth",
        "Has a distinctive dark hemisphere",
        "Rotates once every 5.3 hours",
    ],
    discovery: telescope("Heinrich Wilhelm Olbers", "1807"),
    earth_comparison: "Vesta is about 1/20th the diameter of Earth",
    images: &["textures/asteroids/vesta.jpg"],
    ..BLANK
};

const PALLAS: CelestialBodyData = CelestialBodyData {
    id: BodyId::Pallas,
    name: "Pallas",
    kind: BodyKind::Asteroid,
    radius_km: 258.0,
    mass_kg: 2.11e20,
    density: 2.83,
    gravity: 0.19,
    escape_velocity: 0.33,
    orbit: orbit(2.77, 1686.0),
    rotation_period_hours: 7.8,
    axial_tilt_deg: 78.0,
    description: "Pallas is the third-largest asteroid in the solar system and one of the largest in the asteroid belt.",
    key_facts: &[
        "Third-largest asteroid in the solar system",
        "Highly inclined orbit (34.8° to the ecliptic)",
        "Highly tilted rotation axis (78°)",
        "Discovered in 1802 by Heinrich Wilhelm Olbers",
        "May be a protoplanet that never fully formed",
    ],
    fun_facts: &[
        "Has a highly unusual orbit and rotation",
        "May be composed of water ice and silicate rock",
        "One of the first asteroids discovered",
        "Named after the Greek goddess of wisdom",
    ],
    discovery: telescope("Heinrich Wilhelm Olbers", "1802"),
    earth_comparison: "Pallas is about 1/20th the diameter of Earth",
    images: &["textures/asteroids/pallas.jpg"],
    ..BLANK
};

const HYGIEA: CelestialBodyData = CelestialBodyData {
    id: BodyId::Hygiea,
    name: "Hygiea",
    kind: BodyKind::Asteroid,
    radius_km: 215.0,
    mass_kg: 8.67e19,
    density: 1.77,
    gravity: 0.11,
    escape_velocity: 0.23,
    orbit: orbit(3.14, 2031.0),
    rotation_period_hours: 13.8,
    description: "Hygiea is the fourth-largest asteroid in the solar system and the largest of the dark C-type asteroids.",
    key_facts: &[
        "Fourth-largest asteroid in the solar system",
        "Largest of the dark C-type asteroids",
        "Located in the outer region of the asteroid belt",
        "Discovered in 1849 by Annibale de Gasparis",
        "May be nearly spherical, qualifying it as a dwarf planet",
    ],
    fun_facts: &[
        "Named after the Greek goddess of health",
        "Has a very low density, suggesting it may be a rubble pile",
        "May be the source of the Hygiea family of asteroids",
        "Appears to be nearly spherical in shape",
    ],
    discovery: telescope("Annibale de Gasparis", "1849"),
    earth_comparison: "Hygiea is about 1/25th the diameter of Earth",
    images: &["textures/asteroids/hygiea.jpg"],
    ..BLANK
};
