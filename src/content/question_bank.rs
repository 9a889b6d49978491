//! Question bank: five questions per level across all twenty levels.

use super::questions::{Difficulty, Question, Topic};

pub(crate) static QUESTION_BANK: &[Question] = &[
    // Level 1 - Climate Basics
    Question {
        id: "l1-q1",
        level: 1,
        topic: Topic::Climate,
        difficulty: Difficulty::Easy,
        prompt: "What gas do plants absorb from the air?",
        options: &["Oxygen", "Carbon Dioxide", "Nitrogen", "Hydrogen"],
        correct_answer: 1,
        explanation: "Plants absorb carbon dioxide (CO2) during photosynthesis and release oxygen.",
    },
    Question {
        id: "l1-q2",
        level: 1,
        topic: Topic::Climate,
        difficulty: Difficulty::Easy,
        prompt: "What is the main cause of global warming?",
        options: &["Too many clouds", "Greenhouse gases", "Ocean waves", "Wind patterns"],
        correct_answer: 1,
        explanation: "Greenhouse gases like CO2 and methane trap heat in our atmosphere, causing global warming.",
    },
    Question {
        id: "l1-q3",
        level: 1,
        topic: Topic::Waste,
        difficulty: Difficulty::Easy,
        prompt: "Which bin should plastic bottles go in?",
        options: &["Green bin", "Recycling bin", "General waste", "Compost bin"],
        correct_answer: 1,
        explanation: "Plastic bottles can be recycled into new products, so they go in the recycling bin!",
    },
    Question {
        id: "l1-q4",
        level: 1,
        topic: Topic::Energy,
        difficulty: Difficulty::Easy,
        prompt: "Which of these is a renewable energy source?",
        options: &["Coal", "Oil", "Solar power", "Natural gas"],
        correct_answer: 2,
        explanation: "Solar power comes from the sun, which will keep shining for billions of years!",
    },
    Question {
        id: "l1-q5",
        level: 1,
        topic: Topic::Pollution,
        difficulty: Difficulty::Easy,
        prompt: "What should you do with old batteries?",
        options: &["Throw in trash", "Bury them", "Take to recycling center", "Burn them"],
        correct_answer: 2,
        explanation: "Batteries contain harmful chemicals and should be taken to special recycling centers.",
    },
    // Level 2 - Waste Management
    Question {
        id: "l2-q1",
        level: 2,
        topic: Topic::Waste,
        difficulty: Difficulty::Easy,
        prompt: "What does \"Reduce, Reuse, Recycle\" mean?",
        options: &["A dance move", "Ways to manage waste", "A type of plant", "A song"],
        correct_answer: 1,
        explanation: "The 3 Rs help us minimize waste: Reduce what we use, Reuse items, and Recycle materials.",
    },
    Question {
        id: "l2-q2",
        level: 2,
        topic: Topic::Waste,
        difficulty: Difficulty::Easy,
        prompt: "How long does a plastic bag take to decompose?",
        options: &["1 year", "10 years", "100-500 years", "1 week"],
        correct_answer: 2,
        explanation: "Plastic bags can take 100-500 years to break down! Always use reusable bags.",
    },
    Question {
        id: "l2-q3",
        level: 2,
        topic: Topic::Waste,
        difficulty: Difficulty::Easy,
        prompt: "What can banana peels be turned into?",
        options: &["Plastic", "Compost", "Glass", "Metal"],
        correct_answer: 1,
        explanation: "Food scraps like banana peels can become nutrient-rich compost for plants!",
    },
    Question {
        id: "l2-q4",
        level: 2,
        topic: Topic::Waste,
        difficulty: Difficulty::Medium,
        prompt: "Which item is NOT recyclable?",
        options: &["Newspaper", "Aluminum can", "Greasy pizza box", "Glass bottle"],
        correct_answer: 2,
        explanation: "Greasy pizza boxes contaminate recycling. Put them in compost or trash instead.",
    },
    Question {
        id: "l2-q5",
        level: 2,
        topic: Topic::Waste,
        difficulty: Difficulty::Easy,
        prompt: "What symbol shows something can be recycled?",
        options: &["A star", "Three arrows in a triangle", "A heart", "A circle"],
        correct_answer: 1,
        explanation: "The three chasing arrows symbol indicates that a product can be recycled.",
    },
    // Level 3 - Energy
    Question {
        id: "l3-q1",
        level: 3,
        topic: Topic::Energy,
        difficulty: Difficulty::Easy,
        prompt: "What powers wind turbines?",
        options: &["Electricity", "Moving air", "Water", "Solar panels"],
        correct_answer: 1,
        explanation: "Wind turbines convert the kinetic energy of moving air into electricity.",
    },
    Question {
        id: "l3-q2",
        level: 3,
        topic: Topic::Energy,
        difficulty: Difficulty::Medium,
        prompt: "How can you save energy at home?",
        options: &[
            "Leave lights on",
            "Turn off unused devices",
            "Keep windows open in winter",
            "Use hot water constantly",
        ],
        correct_answer: 1,
        explanation: "Turning off lights and devices when not in use saves electricity and money!",
    },
    Question {
        id: "l3-q3",
        level: 3,
        topic: Topic::Energy,
        difficulty: Difficulty::Medium,
        prompt: "What type of bulb uses less energy?",
        options: &["Incandescent", "LED", "Candle", "Halogen"],
        correct_answer: 1,
        explanation: "LED bulbs use up to 80% less energy than traditional incandescent bulbs.",
    },
    Question {
        id: "l3-q4",
        level: 3,
        topic: Topic::Energy,
        difficulty: Difficulty::Easy,
        prompt: "Where does hydroelectric power come from?",
        options: &["Sun", "Wind", "Flowing water", "Coal"],
        correct_answer: 2,
        explanation: "Hydroelectric power uses the energy of flowing or falling water to generate electricity.",
    },
    Question {
        id: "l3-q5",
        level: 3,
        topic: Topic::Energy,
        difficulty: Difficulty::Medium,
        prompt: "What color roof reflects the most heat?",
        options: &["Black", "Dark brown", "White", "Dark blue"],
        correct_answer: 2,
        explanation: "White roofs reflect sunlight and heat, keeping buildings cooler and saving energy.",
    },
    // Level 4 - Pollution
    Question {
        id: "l4-q1",
        level: 4,
        topic: Topic::Pollution,
        difficulty: Difficulty::Easy,
        prompt: "What causes air pollution in cities?",
        options: &["Trees", "Cars and factories", "Rivers", "Parks"],
        correct_answer: 1,
        explanation: "Vehicles and factories release harmful gases that pollute the air we breathe.",
    },
    Question {
        id: "l4-q2",
        level: 4,
        topic: Topic::Pollution,
        difficulty: Difficulty::Medium,
        prompt: "What is smog?",
        options: &[
            "Clean air",
            "Fog mixed with smoke and pollution",
            "A type of cloud",
            "Fresh mountain air",
        ],
        correct_answer: 1,
        explanation: "Smog is a mixture of smoke, fog, and pollutants that can harm our health.",
    },
    Question {
        id: "l4-q3",
        level: 4,
        topic: Topic::Pollution,
        difficulty: Difficulty::Medium,
        prompt: "How do oil spills affect ocean life?",
        options: &[
            "Help fish grow",
            "Harm and kill marine animals",
            "Make water cleaner",
            "No effect",
        ],
        correct_answer: 1,
        explanation: "Oil spills coat animals and destroy habitats, causing widespread environmental damage.",
    },
    Question {
        id: "l4-q4",
        level: 4,
        topic: Topic::Pollution,
        difficulty: Difficulty::Medium,
        prompt: "What is noise pollution?",
        options: &["Quiet sounds", "Loud, harmful sounds", "Music", "Bird songs"],
        correct_answer: 1,
        explanation: "Excessive noise from traffic, construction, etc. can harm hearing and cause stress.",
    },
    Question {
        id: "l4-q5",
        level: 4,
        topic: Topic::Pollution,
        difficulty: Difficulty::Easy,
        prompt: "Which transport method causes the least pollution?",
        options: &["Car", "Airplane", "Bicycle", "Motorcycle"],
        correct_answer: 2,
        explanation: "Bicycles produce zero emissions and are great for short-distance travel!",
    },
    // Level 5 - Carbon Footprint
    Question {
        id: "l5-q1",
        level: 5,
        topic: Topic::Carbon,
        difficulty: Difficulty::Medium,
        prompt: "What is a carbon footprint?",
        options: &[
            "A footprint made of carbon",
            "Total greenhouse gases we produce",
            "A type of shoe",
            "A drawing",
        ],
        correct_answer: 1,
        explanation: "Your carbon footprint is the total amount of greenhouse gases your activities produce.",
    },
    Question {
        id: "l5-q2",
        level: 5,
        topic: Topic::Carbon,
        difficulty: Difficulty::Medium,
        prompt: "How can you reduce your carbon footprint?",
        options: &["Drive more", "Eat more meat", "Use public transport", "Leave lights on"],
        correct_answer: 2,
        explanation: "Public transport produces fewer emissions per person than individual cars.",
    },
    Question {
        id: "l5-q3",
        level: 5,
        topic: Topic::Carbon,
        difficulty: Difficulty::Medium,
        prompt: "Which food has the highest carbon footprint?",
        options: &["Vegetables", "Fruits", "Beef", "Bread"],
        correct_answer: 2,
        explanation: "Beef production requires lots of land, water, and produces significant methane emissions.",
    },
    Question {
        id: "l5-q4",
        level: 5,
        topic: Topic::Carbon,
        difficulty: Difficulty::Hard,
        prompt: "What is carbon neutral?",
        options: &[
            "Having no carbon",
            "Balancing emissions with removal",
            "A type of battery",
            "A color",
        ],
        correct_answer: 1,
        explanation: "Carbon neutral means removing as much CO2 as you produce, resulting in net-zero emissions.",
    },
    Question {
        id: "l5-q5",
        level: 5,
        topic: Topic::Carbon,
        difficulty: Difficulty::Medium,
        prompt: "What absorbs carbon from the atmosphere?",
        options: &["Plastic", "Concrete", "Trees and oceans", "Cars"],
        correct_answer: 2,
        explanation: "Trees absorb CO2 during photosynthesis, and oceans absorb CO2 from the air.",
    },
    // Level 6 - Advanced Climate
    Question {
        id: "l6-q1",
        level: 6,
        topic: Topic::Climate,
        difficulty: Difficulty::Medium,
        prompt: "What is the greenhouse effect?",
        options: &[
            "Growing plants in greenhouses",
            "Trapping heat in atmosphere",
            "Painting houses green",
            "A type of garden",
        ],
        correct_answer: 1,
        explanation: "The greenhouse effect is when gases in our atmosphere trap heat from the sun.",
    },
    Question {
        id: "l6-q2",
        level: 6,
        topic: Topic::Climate,
        difficulty: Difficulty::Hard,
        prompt: "Which gas is the most common greenhouse gas?",
        options: &["Oxygen", "Carbon dioxide", "Water vapor", "Nitrogen"],
        correct_answer: 2,
        explanation: "Water vapor is actually the most abundant greenhouse gas, though CO2 gets more attention.",
    },
    Question {
        id: "l6-q3",
        level: 6,
        topic: Topic::Climate,
        difficulty: Difficulty::Medium,
        prompt: "What happens when ice caps melt?",
        options: &["Nothing", "Sea levels rise", "More ice forms", "Oceans shrink"],
        correct_answer: 1,
        explanation: "Melting ice caps add water to the oceans, causing sea levels to rise and threatening coastal areas.",
    },
    Question {
        id: "l6-q4",
        level: 6,
        topic: Topic::Climate,
        difficulty: Difficulty::Hard,
        prompt: "What is the Paris Agreement about?",
        options: &["Fashion", "Food", "Climate change action", "Tourism"],
        correct_answer: 2,
        explanation: "The Paris Agreement is an international treaty to limit global warming to 1.5-2°C.",
    },
    Question {
        id: "l6-q5",
        level: 6,
        topic: Topic::Climate,
        difficulty: Difficulty::Medium,
        prompt: "How does deforestation affect climate?",
        options: &[
            "Cools the planet",
            "Has no effect",
            "Increases CO2 levels",
            "Creates more rain",
        ],
        correct_answer: 2,
        explanation: "Cutting down trees releases stored carbon and removes natural CO2 absorbers.",
    },
    // Level 7 - Oceans
    Question {
        id: "l7-q1",
        level: 7,
        topic: Topic::Pollution,
        difficulty: Difficulty::Medium,
        prompt: "What is the Great Pacific Garbage Patch?",
        options: &[
            "A garden",
            "A massive collection of ocean plastic",
            "A recycling center",
            "A beach",
        ],
        correct_answer: 1,
        explanation: "It is a huge area of floating plastic debris in the Pacific Ocean.",
    },
    Question {
        id: "l7-q2",
        level: 7,
        topic: Topic::Pollution,
        difficulty: Difficulty::Hard,
        prompt: "What are microplastics?",
        options: &[
            "Tiny robots",
            "Small plastic particles under 5mm",
            "Recyclable materials",
            "A type of fabric",
        ],
        correct_answer: 1,
        explanation: "Microplastics are tiny plastic fragments that pollute water and enter the food chain.",
    },
    Question {
        id: "l7-q3",
        level: 7,
        topic: Topic::Climate,
        difficulty: Difficulty::Medium,
        prompt: "What is ocean acidification?",
        options: &[
            "Oceans becoming less salty",
            "Oceans absorbing CO2 and becoming more acidic",
            "Oceans getting warmer",
            "Oceans evaporating",
        ],
        correct_answer: 1,
        explanation: "When oceans absorb excess CO2, they become more acidic, harming marine life.",
    },
    Question {
        id: "l7-q4",
        level: 7,
        topic: Topic::Pollution,
        difficulty: Difficulty::Medium,
        prompt: "How do plastic straws harm sea animals?",
        options: &[
            "They help them",
            "Animals eat or get trapped in them",
            "No harm",
            "They clean the ocean",
        ],
        correct_answer: 1,
        explanation: "Sea turtles and other animals can choke on or get entangled in plastic debris.",
    },
    Question {
        id: "l7-q5",
        level: 7,
        topic: Topic::Energy,
        difficulty: Difficulty::Hard,
        prompt: "What is tidal energy?",
        options: &[
            "Energy from the moon",
            "Energy from ocean tides",
            "Energy from fish",
            "Energy from boats",
        ],
        correct_answer: 1,
        explanation: "Tidal energy harnesses the power of ocean tides to generate clean electricity.",
    },
    // Level 8 - Biodiversity
    Question {
        id: "l8-q1",
        level: 8,
        topic: Topic::Climate,
        difficulty: Difficulty::Medium,
        prompt: "What is biodiversity?",
        options: &[
            "One type of animal",
            "Variety of life on Earth",
            "A type of plant",
            "A disease",
        ],
        correct_answer: 1,
        explanation: "Biodiversity refers to the variety of all living things and their ecosystems.",
    },
    Question {
        id: "l8-q2",
        level: 8,
        topic: Topic::Climate,
        difficulty: Difficulty::Hard,
        prompt: "Why are bees important for the environment?",
        options: &[
            "They make honey",
            "They pollinate plants",
            "They eat pests",
            "All of the above",
        ],
        correct_answer: 3,
        explanation: "Bees are crucial pollinators and contribute to food production and ecosystem health.",
    },
    Question {
        id: "l8-q3",
        level: 8,
        topic: Topic::Climate,
        difficulty: Difficulty::Medium,
        prompt: "What is an endangered species?",
        options: &[
            "A fast animal",
            "A species at risk of extinction",
            "A new species",
            "A large animal",
        ],
        correct_answer: 1,
        explanation: "Endangered species have populations so small they risk disappearing forever.",
    },
    Question {
        id: "l8-q4",
        level: 8,
        topic: Topic::Pollution,
        difficulty: Difficulty::Hard,
        prompt: "How does light pollution affect wildlife?",
        options: &[
            "Helps animals see",
            "Disrupts animal behavior and migration",
            "No effect",
            "Makes them stronger",
        ],
        correct_answer: 1,
        explanation: "Artificial light confuses nocturnal animals and disrupts migration patterns.",
    },
    Question {
        id: "l8-q5",
        level: 8,
        topic: Topic::Climate,
        difficulty: Difficulty::Medium,
        prompt: "What is a habitat?",
        options: &[
            "A type of clothing",
            "Natural home of an animal or plant",
            "A human house",
            "A type of food",
        ],
        correct_answer: 1,
        explanation: "A habitat provides everything a species needs to survive: food, water, and shelter.",
    },
    // Level 9 - Sustainable Living
    Question {
        id: "l9-q1",
        level: 9,
        topic: Topic::Carbon,
        difficulty: Difficulty::Medium,
        prompt: "What is sustainable living?",
        options: &[
            "Living expensively",
            "Meeting needs without harming future generations",
            "Living in nature",
            "Using more resources",
        ],
        correct_answer: 1,
        explanation: "Sustainable living means using resources responsibly so future generations can also thrive.",
    },
    Question {
        id: "l9-q2",
        level: 9,
        topic: Topic::Waste,
        difficulty: Difficulty::Hard,
        prompt: "What is fast fashion?",
        options: &[
            "Quick delivery",
            "Cheap, disposable clothing that harms the environment",
            "Athletic wear",
            "Designer clothes",
        ],
        correct_answer: 1,
        explanation: "Fast fashion produces massive waste and pollution through rapid, low-quality clothing production.",
    },
    Question {
        id: "l9-q3",
        level: 9,
        topic: Topic::Energy,
        difficulty: Difficulty::Hard,
        prompt: "What is a zero-energy building?",
        options: &[
            "A building with no electricity",
            "A building that produces as much energy as it uses",
            "An abandoned building",
            "A very cold building",
        ],
        correct_answer: 1,
        explanation: "Zero-energy buildings generate renewable energy equal to their consumption.",
    },
    Question {
        id: "l9-q4",
        level: 9,
        topic: Topic::Carbon,
        difficulty: Difficulty::Hard,
        prompt: "What is carbon offsetting?",
        options: &[
            "Ignoring carbon",
            "Compensating emissions by funding green projects",
            "Measuring carbon",
            "Selling carbon",
        ],
        correct_answer: 1,
        explanation: "Carbon offsetting involves investing in projects that reduce CO2 to balance your emissions.",
    },
    Question {
        id: "l9-q5",
        level: 9,
        topic: Topic::Waste,
        difficulty: Difficulty::Medium,
        prompt: "What is upcycling?",
        options: &[
            "Throwing things away",
            "Transforming waste into valuable products",
            "Cycling uphill",
            "Buying new things",
        ],
        correct_answer: 1,
        explanation: "Upcycling creatively repurposes waste materials into higher-quality products.",
    },
    // Level 10 - Advanced
    Question {
        id: "l10-q1",
        level: 10,
        topic: Topic::Climate,
        difficulty: Difficulty::Medium,
        prompt: "What percentage of Earth is covered by water?",
        options: &["50%", "71%", "30%", "90%"],
        correct_answer: 1,
        explanation: "About 71% of Earth's surface is covered by water, mostly in oceans.",
    },
    Question {
        id: "l10-q2",
        level: 10,
        topic: Topic::Waste,
        difficulty: Difficulty::Medium,
        prompt: "What is e-waste?",
        options: &["Electronic waste", "Easy waste", "Energy waste", "Empty waste"],
        correct_answer: 0,
        explanation: "E-waste is discarded electronic devices that contain harmful materials.",
    },
    Question {
        id: "l10-q3",
        level: 10,
        topic: Topic::Energy,
        difficulty: Difficulty::Medium,
        prompt: "Which country produces the most solar energy?",
        options: &["USA", "China", "Germany", "India"],
        correct_answer: 1,
        explanation: "China leads the world in solar energy capacity and production.",
    },
    Question {
        id: "l10-q4",
        level: 10,
        topic: Topic::Pollution,
        difficulty: Difficulty::Medium,
        prompt: "What is acid rain caused by?",
        options: &[
            "Sulfur dioxide and nitrogen oxides",
            "Carbon dioxide only",
            "Water vapor",
            "Oxygen",
        ],
        correct_answer: 0,
        explanation: "Acid rain forms when sulfur dioxide and nitrogen oxides react with water in the atmosphere.",
    },
    Question {
        id: "l10-q5",
        level: 10,
        topic: Topic::Carbon,
        difficulty: Difficulty::Medium,
        prompt: "How many trees are cut down each year?",
        options: &["1 million", "3 billion", "15 billion", "100 billion"],
        correct_answer: 2,
        explanation: "Approximately 15 billion trees are cut down globally each year.",
    },
    // Level 11 - Advanced
    Question {
        id: "l11-q1",
        level: 11,
        topic: Topic::Climate,
        difficulty: Difficulty::Medium,
        prompt: "What is permafrost?",
        options: &["Frozen ground year-round", "Permanent ice", "Frozen water", "Cold weather"],
        correct_answer: 0,
        explanation: "Permafrost is ground that stays frozen for at least two consecutive years.",
    },
    Question {
        id: "l11-q2",
        level: 11,
        topic: Topic::Waste,
        difficulty: Difficulty::Medium,
        prompt: "What happens to electronics in landfills?",
        options: &[
            "They biodegrade quickly",
            "Toxic materials leach into soil",
            "They become compost",
            "Nothing happens",
        ],
        correct_answer: 1,
        explanation: "Electronics contain lead, mercury, and other toxins that can contaminate groundwater.",
    },
    Question {
        id: "l11-q3",
        level: 11,
        topic: Topic::Energy,
        difficulty: Difficulty::Medium,
        prompt: "What is geothermal energy?",
        options: &[
            "Energy from hot rocks underground",
            "Energy from geometry",
            "Energy from gas",
            "Energy from gems",
        ],
        correct_answer: 0,
        explanation: "Geothermal energy uses heat from Earth's core to generate electricity.",
    },
    Question {
        id: "l11-q4",
        level: 11,
        topic: Topic::Pollution,
        difficulty: Difficulty::Medium,
        prompt: "What is eutrophication?",
        options: &[
            "Fish growing larger",
            "Excessive nutrients causing algae blooms",
            "Water freezing",
            "Water evaporating",
        ],
        correct_answer: 1,
        explanation: "Eutrophication occurs when excess nutrients cause algae blooms that deplete oxygen.",
    },
    Question {
        id: "l11-q5",
        level: 11,
        topic: Topic::Carbon,
        difficulty: Difficulty::Medium,
        prompt: "What is a carbon sink?",
        options: &[
            "A kitchen sink",
            "Something that absorbs more CO2 than it releases",
            "A carbon container",
            "A type of drain",
        ],
        correct_answer: 1,
        explanation: "Carbon sinks like forests and oceans absorb more CO2 than they release.",
    },
    // Level 12 - Advanced
    Question {
        id: "l12-q1",
        level: 12,
        topic: Topic::Climate,
        difficulty: Difficulty::Medium,
        prompt: "What causes coral bleaching?",
        options: &[
            "Ocean warming and acidification",
            "Too many fish",
            "Cold water",
            "Pollution only",
        ],
        correct_answer: 0,
        explanation: "Rising ocean temperatures cause coral to expel algae and turn white.",
    },
    Question {
        id: "l12-q2",
        level: 12,
        topic: Topic::Waste,
        difficulty: Difficulty::Medium,
        prompt: "How long does glass take to decompose?",
        options: &["10 years", "100 years", "1 million years", "1 week"],
        correct_answer: 2,
        explanation: "Glass can take up to 1 million years to decompose in landfills.",
    },
    Question {
        id: "l12-q3",
        level: 12,
        topic: Topic::Energy,
        difficulty: Difficulty::Medium,
        prompt: "What percentage of energy is lost in transmission?",
        options: &["0%", "5-10%", "50%", "90%"],
        correct_answer: 1,
        explanation: "About 5-10% of electricity is lost during transmission through power lines.",
    },
    Question {
        id: "l12-q4",
        level: 12,
        topic: Topic::Pollution,
        difficulty: Difficulty::Medium,
        prompt: "What is bioaccumulation?",
        options: &[
            "Animals getting bigger",
            "Toxins accumulating in food chain",
            "Animals migrating",
            "Animals reproducing more",
        ],
        correct_answer: 1,
        explanation: "Toxins accumulate in organisms and increase in concentration up the food chain.",
    },
    Question {
        id: "l12-q5",
        level: 12,
        topic: Topic::Carbon,
        difficulty: Difficulty::Medium,
        prompt: "What is the carbon cycle?",
        options: &[
            "A bike path",
            "Movement of carbon through environment",
            "A carbon measurement",
            "A type of exercise",
        ],
        correct_answer: 1,
        explanation: "The carbon cycle describes how carbon moves between atmosphere, land, water, and living things.",
    },
    // Level 13 - Advanced
    Question {
        id: "l13-q1",
        level: 13,
        topic: Topic::Climate,
        difficulty: Difficulty::Medium,
        prompt: "What is an ecological footprint?",
        options: &[
            "A shoe size",
            "Measure of human demand on nature",
            "A hiking trail",
            "A type of garden",
        ],
        correct_answer: 1,
        explanation: "An ecological footprint measures how much land and water people need to produce what they consume and absorb their waste.",
    },
    Question {
        id: "l13-q2",
        level: 13,
        topic: Topic::Waste,
        difficulty: Difficulty::Medium,
        prompt: "What is the circular economy?",
        options: &[
            "Round economy",
            "Economy that eliminates waste by reusing materials",
            "Circle of money",
            "Banking system",
        ],
        correct_answer: 1,
        explanation: "A circular economy keeps materials in use through reuse, repair and recycling instead of throwing them away.",
    },
    Question {
        id: "l13-q3",
        level: 13,
        topic: Topic::Energy,
        difficulty: Difficulty::Medium,
        prompt: "How efficient are typical solar panels?",
        options: &["5%", "15-22%", "50%", "95%"],
        correct_answer: 1,
        explanation: "Most commercial solar panels convert about 15-22% of sunlight into electricity.",
    },
    Question {
        id: "l13-q4",
        level: 13,
        topic: Topic::Pollution,
        difficulty: Difficulty::Medium,
        prompt: "What are POPs (Persistent Organic Pollutants)?",
        options: &[
            "Popular music",
            "Toxic chemicals that persist in environment",
            "Positive outcomes",
            "Plant species",
        ],
        correct_answer: 1,
        explanation: "Persistent organic pollutants are toxic chemicals that break down very slowly and build up in living things.",
    },
    Question {
        id: "l13-q5",
        level: 13,
        topic: Topic::Carbon,
        difficulty: Difficulty::Medium,
        prompt: "What is blue carbon?",
        options: &[
            "Sad water",
            "Carbon stored in coastal ecosystems",
            "Blue colored carbon",
            "Water pollution",
        ],
        correct_answer: 1,
        explanation: "Blue carbon is carbon captured and stored by coastal ecosystems like mangroves, seagrasses and salt marshes.",
    },
    // Level 14 - Advanced
    Question {
        id: "l14-q1",
        level: 14,
        topic: Topic::Climate,
        difficulty: Difficulty::Medium,
        prompt: "What is climate justice?",
        options: &[
            "Legal courts for weather",
            "Fair distribution of climate change burdens",
            "Climate lawsuits",
            "Weather justice",
        ],
        correct_answer: 1,
        explanation: "Climate justice asks that the burdens of climate change be shared fairly between people and nations.",
    },
    Question {
        id: "l14-q2",
        level: 14,
        topic: Topic::Waste,
        difficulty: Difficulty::Medium,
        prompt: "What is extended producer responsibility?",
        options: &[
            "Responsibility shift",
            "Manufacturers responsible for product lifecycle",
            "Extended production",
            "Producer payments",
        ],
        correct_answer: 1,
        explanation: "Extended producer responsibility makes manufacturers responsible for their products even after they are thrown away.",
    },
    Question {
        id: "l14-q3",
        level: 14,
        topic: Topic::Energy,
        difficulty: Difficulty::Medium,
        prompt: "What is baseload power?",
        options: &[
            "Electric base",
            "Minimum continuous power needed",
            "Baseball power",
            "Basic electricity",
        ],
        correct_answer: 1,
        explanation: "Baseload power is the minimum level of electricity demand that must be met around the clock.",
    },
    Question {
        id: "l14-q4",
        level: 14,
        topic: Topic::Pollution,
        difficulty: Difficulty::Medium,
        prompt: "What is thermal pollution?",
        options: &[
            "Warm blankets",
            "Heat discharge altering water temperature",
            "Thermometer pollution",
            "Hot weather",
        ],
        correct_answer: 1,
        explanation: "Thermal pollution happens when industries discharge heated water that changes the temperature of rivers and lakes.",
    },
    Question {
        id: "l14-q5",
        level: 14,
        topic: Topic::Carbon,
        difficulty: Difficulty::Medium,
        prompt: "What are carbon credits?",
        options: &[
            "Carbon credit cards",
            "Tradable permits for CO2 emissions",
            "Carbon loans",
            "Carbon money",
        ],
        correct_answer: 1,
        explanation: "A carbon credit is a tradable permit that allows the holder to emit one tonne of CO2.",
    },
    // Level 15 - Expert
    Question {
        id: "l15-q1",
        level: 15,
        topic: Topic::Climate,
        difficulty: Difficulty::Hard,
        prompt: "What is the albedo effect?",
        options: &[
            "The color of leaves",
            "How much sunlight a surface reflects",
            "A type of cloud",
            "Ocean saltiness",
        ],
        correct_answer: 1,
        explanation: "Albedo is the share of sunlight a surface reflects, and melting ice lowers it and speeds up warming.",
    },
    Question {
        id: "l15-q2",
        level: 15,
        topic: Topic::Waste,
        difficulty: Difficulty::Hard,
        prompt: "What is industrial symbiosis?",
        options: &[
            "Factories competing",
            "Industries sharing waste and resources",
            "A factory song",
            "Robot workers",
        ],
        correct_answer: 1,
        explanation: "Industrial symbiosis links companies so that the by-products of one become raw materials for another.",
    },
    Question {
        id: "l15-q3",
        level: 15,
        topic: Topic::Energy,
        difficulty: Difficulty::Hard,
        prompt: "What is pumped hydro storage?",
        options: &[
            "Water bottles",
            "Storing energy by pumping water uphill",
            "Pumping oil",
            "A swimming pool filter",
        ],
        correct_answer: 1,
        explanation: "Pumped hydro stores energy by pumping water to a higher reservoir and releasing it through turbines when power is needed.",
    },
    Question {
        id: "l15-q4",
        level: 15,
        topic: Topic::Pollution,
        difficulty: Difficulty::Hard,
        prompt: "What is particulate matter (PM2.5)?",
        options: &[
            "A time of day",
            "Tiny airborne particles that harm the lungs",
            "A radio station",
            "A plant fertilizer",
        ],
        correct_answer: 1,
        explanation: "PM2.5 are fine particles smaller than 2.5 micrometres that can travel deep into the lungs.",
    },
    Question {
        id: "l15-q5",
        level: 15,
        topic: Topic::Carbon,
        difficulty: Difficulty::Hard,
        prompt: "What is carbon sequestration?",
        options: &[
            "Selling carbon",
            "Capturing and storing carbon long-term",
            "Counting carbon",
            "Burning carbon",
        ],
        correct_answer: 1,
        explanation: "Carbon sequestration captures CO2 and stores it in plants, soils, oceans or rock formations.",
    },
    // Level 16 - Expert
    Question {
        id: "l16-q1",
        level: 16,
        topic: Topic::Climate,
        difficulty: Difficulty::Hard,
        prompt: "What are tipping points in climate?",
        options: &[
            "Restaurant tips",
            "Thresholds that trigger large irreversible changes",
            "Weather forecasts",
            "Mountain peaks",
        ],
        correct_answer: 1,
        explanation: "Climate tipping points are thresholds beyond which a system such as an ice sheet changes abruptly and often irreversibly.",
    },
    Question {
        id: "l16-q2",
        level: 16,
        topic: Topic::Waste,
        difficulty: Difficulty::Hard,
        prompt: "What is a cradle-to-cradle design?",
        options: &[
            "Baby furniture design",
            "Design where products are fully reused or recycled",
            "A crib factory",
            "Single-use design",
        ],
        correct_answer: 1,
        explanation: "Cradle-to-cradle design creates products whose materials can be endlessly recycled or safely returned to nature.",
    },
    Question {
        id: "l16-q3",
        level: 16,
        topic: Topic::Energy,
        difficulty: Difficulty::Hard,
        prompt: "What is capacity factor in energy?",
        options: &[
            "Size of a battery",
            "Actual output compared to maximum possible output",
            "Number of power plants",
            "Cost of electricity",
        ],
        correct_answer: 1,
        explanation: "Capacity factor compares how much energy a plant really produces with what it could produce at full power all the time.",
    },
    Question {
        id: "l16-q4",
        level: 16,
        topic: Topic::Pollution,
        difficulty: Difficulty::Hard,
        prompt: "What is ground-level ozone?",
        options: &[
            "The protective ozone layer",
            "A harmful pollutant formed near the ground",
            "Fresh mountain air",
            "A cleaning product",
        ],
        correct_answer: 1,
        explanation: "Ground-level ozone forms when pollutants from vehicles and industry react in sunlight, and it harms breathing.",
    },
    Question {
        id: "l16-q5",
        level: 16,
        topic: Topic::Carbon,
        difficulty: Difficulty::Hard,
        prompt: "What is CCUS technology?",
        options: &[
            "A space agency",
            "Carbon capture, utilization and storage",
            "A car brand",
            "A recycling symbol",
        ],
        correct_answer: 1,
        explanation: "CCUS captures CO2 from power plants or factories and either uses it or stores it underground.",
    },
    // Level 17 - Expert
    Question {
        id: "l17-q1",
        level: 17,
        topic: Topic::Climate,
        difficulty: Difficulty::Hard,
        prompt: "What is climate sensitivity?",
        options: &[
            "How people feel about weather",
            "Warming expected from doubling atmospheric CO2",
            "Sensitivity of thermometers",
            "Seasonal allergies",
        ],
        correct_answer: 1,
        explanation: "Climate sensitivity is the long-term warming expected if atmospheric CO2 doubles compared to pre-industrial levels.",
    },
    Question {
        id: "l17-q2",
        level: 17,
        topic: Topic::Waste,
        difficulty: Difficulty::Hard,
        prompt: "What is material flow analysis?",
        options: &[
            "Studying rivers",
            "Tracking how materials move through an economy",
            "A fashion analysis",
            "Measuring flour",
        ],
        correct_answer: 1,
        explanation: "Material flow analysis tracks where materials come from, how they are used and where they end up.",
    },
    Question {
        id: "l17-q3",
        level: 17,
        topic: Topic::Energy,
        difficulty: Difficulty::Hard,
        prompt: "What is grid parity?",
        options: &[
            "Equal power lines",
            "When renewable power costs the same as grid power",
            "A power outage",
            "A type of battery",
        ],
        correct_answer: 1,
        explanation: "Grid parity is reached when electricity from a source like solar costs the same as buying it from the grid.",
    },
    Question {
        id: "l17-q4",
        level: 17,
        topic: Topic::Pollution,
        difficulty: Difficulty::Hard,
        prompt: "What is environmental remediation?",
        options: &[
            "Environmental art",
            "Cleaning up contaminated land or water",
            "A medical treatment",
            "Planting flowers",
        ],
        correct_answer: 1,
        explanation: "Environmental remediation removes or neutralizes pollution in soil, groundwater or sediment.",
    },
    Question {
        id: "l17-q5",
        level: 17,
        topic: Topic::Carbon,
        difficulty: Difficulty::Hard,
        prompt: "What is negative emissions technology?",
        options: &[
            "Fishing nets",
            "Technologies that remove CO2 from the atmosphere",
            "Internet networks",
            "Emission taxes",
        ],
        correct_answer: 1,
        explanation: "Negative emissions technologies remove more CO2 from the air than they release.",
    },
    // Level 18 - Expert
    Question {
        id: "l18-q1",
        level: 18,
        topic: Topic::Climate,
        difficulty: Difficulty::Hard,
        prompt: "What are Shared Socioeconomic Pathways?",
        options: &[
            "Shipping routes",
            "Scenarios of how society and emissions may develop",
            "Social media platforms",
            "Economic sanctions",
        ],
        correct_answer: 1,
        explanation: "Shared Socioeconomic Pathways are scenarios climate scientists use to explore how population, economy and emissions could change.",
    },
    Question {
        id: "l18-q2",
        level: 18,
        topic: Topic::Waste,
        difficulty: Difficulty::Hard,
        prompt: "What is biomimicry?",
        options: &[
            "Copying other people",
            "Design inspired by nature",
            "Animal costumes",
            "Studying fossils",
        ],
        correct_answer: 1,
        explanation: "Biomimicry solves human design problems by learning from strategies found in nature.",
    },
    Question {
        id: "l18-q3",
        level: 18,
        topic: Topic::Energy,
        difficulty: Difficulty::Hard,
        prompt: "What is vehicle-to-grid technology?",
        options: &[
            "Car racing",
            "Electric vehicles sending power back to the grid",
            "Vehicles with solar roofs",
            "Gas station networks",
        ],
        correct_answer: 1,
        explanation: "Vehicle-to-grid technology lets parked electric cars feed stored electricity back to the grid when demand is high.",
    },
    Question {
        id: "l18-q4",
        level: 18,
        topic: Topic::Pollution,
        difficulty: Difficulty::Hard,
        prompt: "What is phytoremediation?",
        options: &[
            "Taking photos of plants",
            "Using plants to clean polluted soil or water",
            "Growing plants indoors",
            "Plant diseases",
        ],
        correct_answer: 1,
        explanation: "Phytoremediation uses plants that absorb or break down pollutants to clean contaminated sites.",
    },
    Question {
        id: "l18-q5",
        level: 18,
        topic: Topic::Carbon,
        difficulty: Difficulty::Hard,
        prompt: "What is direct air capture?",
        options: &[
            "Opening windows",
            "Machines that pull CO2 directly from the air",
            "Air conditioning",
            "Airplane exhaust filters",
        ],
        correct_answer: 1,
        explanation: "Direct air capture uses machines with chemical filters to remove CO2 straight from the atmosphere.",
    },
    // Level 19 - Expert
    Question {
        id: "l19-q1",
        level: 19,
        topic: Topic::Climate,
        difficulty: Difficulty::Hard,
        prompt: "What is radiative forcing?",
        options: &[
            "Strong winds",
            "Change in the energy balance of the Earth",
            "Nuclear radiation",
            "Forcing plants to grow",
        ],
        correct_answer: 1,
        explanation: "Radiative forcing measures how factors like greenhouse gases change the balance of energy entering and leaving Earth.",
    },
    Question {
        id: "l19-q2",
        level: 19,
        topic: Topic::Waste,
        difficulty: Difficulty::Hard,
        prompt: "What is the Doughnut Economics model?",
        options: &[
            "A bakery business plan",
            "Meeting human needs within planetary limits",
            "A circular city",
            "A sugar tax",
        ],
        correct_answer: 1,
        explanation: "Doughnut Economics aims to meet everyone's basic needs without overshooting the planet's ecological limits.",
    },
    Question {
        id: "l19-q3",
        level: 19,
        topic: Topic::Energy,
        difficulty: Difficulty::Hard,
        prompt: "What is green hydrogen?",
        options: &[
            "Hydrogen colored green",
            "Hydrogen made with renewable electricity",
            "Hydrogen from plants",
            "Hydrogen from coal",
        ],
        correct_answer: 1,
        explanation: "Green hydrogen is produced by splitting water with electricity from renewable sources.",
    },
    Question {
        id: "l19-q4",
        level: 19,
        topic: Topic::Pollution,
        difficulty: Difficulty::Hard,
        prompt: "What are forever chemicals (PFAS)?",
        options: &[
            "Long-lasting paints",
            "Synthetic chemicals that almost never break down",
            "Eternal flames",
            "Plastic furniture",
        ],
        correct_answer: 1,
        explanation: "PFAS are man-made chemicals used in non-stick and waterproof products that persist in the environment for decades.",
    },
    Question {
        id: "l19-q5",
        level: 19,
        topic: Topic::Carbon,
        difficulty: Difficulty::Hard,
        prompt: "What is carbon budgeting?",
        options: &[
            "Saving money on fuel",
            "Limiting total CO2 emissions to stay below a warming target",
            "Buying carbon credits",
            "Taxing cars",
        ],
        correct_answer: 1,
        explanation: "A carbon budget is the total amount of CO2 that can still be emitted while keeping warming below a chosen limit.",
    },
    // Level 20 - Expert
    Question {
        id: "l20-q1",
        level: 20,
        topic: Topic::Climate,
        difficulty: Difficulty::Hard,
        prompt: "What is the IPCC?",
        options: &[
            "A sports league",
            "The UN body that assesses climate science",
            "A recycling company",
            "An energy supplier",
        ],
        correct_answer: 1,
        explanation: "The Intergovernmental Panel on Climate Change reviews and summarizes climate science for governments.",
    },
    Question {
        id: "l20-q2",
        level: 20,
        topic: Topic::Waste,
        difficulty: Difficulty::Hard,
        prompt: "What are planetary boundaries?",
        options: &[
            "Country borders",
            "Safe limits for Earth's life-support systems",
            "Edges of the solar system",
            "Ocean coastlines",
        ],
        correct_answer: 1,
        explanation: "Planetary boundaries define nine Earth-system limits within which humanity can safely operate.",
    },
    Question {
        id: "l20-q3",
        level: 20,
        topic: Topic::Energy,
        difficulty: Difficulty::Hard,
        prompt: "What is fusion energy?",
        options: &[
            "Mixing fuels",
            "Energy released by joining light atomic nuclei",
            "Burning coal faster",
            "Combining solar and wind",
        ],
        correct_answer: 1,
        explanation: "Fusion energy comes from joining light atoms like hydrogen, the same process that powers the sun.",
    },
    Question {
        id: "l20-q4",
        level: 20,
        topic: Topic::Pollution,
        difficulty: Difficulty::Hard,
        prompt: "What is environmental DNA (eDNA)?",
        options: &[
            "Electronic DNA",
            "Genetic material collected from soil, water or air",
            "Engineered DNA",
            "DNA from extinct animals",
        ],
        correct_answer: 1,
        explanation: "Environmental DNA lets scientists detect which species live in a place from traces left in water, soil or air.",
    },
    Question {
        id: "l20-q5",
        level: 20,
        topic: Topic::Carbon,
        difficulty: Difficulty::Hard,
        prompt: "What is net-zero emissions?",
        options: &[
            "Producing no energy",
            "Balancing emissions released with emissions removed",
            "Zero population growth",
            "No more factories",
        ],
        correct_answer: 1,
        explanation: "Net-zero emissions means any greenhouse gases still released are balanced by an equal amount removed from the atmosphere.",
    },
];
