//! Built-in keyword tables.
//!
//! Each table is an ordered list of `(keyword, topic)` pairs. Entries are kept
//! exactly as published, including repeated keywords and topics that carry a
//! trailing space (`"Circular Motion "`), so classification output stays
//! reproducible against the historical tables.

/// Subject codes with a built-in table, in registration order.
pub(crate) const BUILTIN: &[(&str, &[(&str, &str)])] = &[
    ("9231", SUBJECT_9231),
    ("9618", SUBJECT_9618),
    ("9608", SUBJECT_9608),
    ("9701", SUBJECT_9701),
];

/// Subject 9231.
pub(crate) const SUBJECT_9231: &[(&str, &str)] = &[
    ("roots", "Polynomial Roots"),
    ("cubic equation", "Polynomial Roots"),
    ("sum of roots", "Polynomial Roots"),
    ("product of roots", "Polynomial Roots"),
    ("vector", "Vectors"),
    ("plane", "Vectors"),
    ("line", "Vectors"),
    ("intersection", "Vectors"),
    ("perpendicular distance", "Vectors"),
    ("scalar product", "Vectors"),
    ("mathematical induction", "Mathematical Induction"),
    ("induction", "Mathematical Induction"),
    ("matrix", "Matrices"),
    ("matrices", "Matrices"),
    ("inverse of a", "Matrices"),
    ("invariant line", "Matrices"),
    ("transformation", "Matrices"),
    ("enlargement", "Matrices"),
    ("shear", "Matrices"),
    ("method of differences", "Series Summation"),
    ("summation", "Series Summation"),
    ("series", "Series Summation"),
    ("polar equation", "Polar Coordinates"),
    ("polar coordinates", "Polar Coordinates"),
    ("asymptotes", "Curve Sketching"),
    ("sketch", "Curve Sketching"),
    ("stationary points", "Curve Sketching"),
    ("Cartesian equation", "Polar Coordinates"),
    ("initial line", "Polar Coordinates"),
    ("pole", "Polar Coordinates"),
    ("elastic string", "Hooke's Law"),
    ("elastic spring", "Hooke's Law"),
    ("modulus of elasticity", "Hooke's Law"),
    ("natural length", "Hooke's Law"),
    ("extension", "Hooke's Law"),
    ("horizontal circle", "Circular Motion"),
    ("angular speed", "Circular Motion"),
    ("circular path", "Circular Motion"),
    ("vertical circle", "Circular Motion"),
    ("peg", "Circular Motion "),
    ("string taut", "Circular Motion"),
    ("string becomes slack", "Circular Motion "),
    ("collide", "Collisions / Impulse and Momentum"),
    ("collision", "Collisions / Impulse and Momentum"),
    ("spheres", "Collisions / Impulse and Momentum"),
    ("coefficient of restitution", "Collisions / Impulse and Momentum"),
    ("line of centres", "Collisions / Impulse and Momentum"),
    ("impulse", "Collisions / Impulse and Momentum"),
    ("momentum", "Collisions / Impulse and Momentum"),
    ("uniform rod", "Statics of Rigid Bodies / Equilibrium"),
    ("equilibrium", "Statics of Rigid Bodies / Equilibrium"),
    ("rough wall", "Statics of Rigid Bodies / Equilibrium"),
    ("friction", "Statics of Rigid Bodies / Equilibrium"),
    ("coefficient of friction", "Statics of Rigid Bodies / Equilibrium"),
    ("about to slip", "Statics of Rigid Bodies / Equilibrium"),
    ("frictional force", "Statics of Rigid Bodies / Equilibrium"),
    ("moments", "Statics of Rigid Bodies / Equilibrium"),
    ("projected", "Projectile Motion"),
    ("trajectory", "Projectile Motion"),
    ("horizontal ground", "Projectile Motion"),
    ("range", "Projectile Motion"),
    ("time of flight", "Projectile Motion"),
    ("resistive force", "Variable Force Motion "),
    ("resistance", "Variable Force Motion "),
    ("terminal velocity", "Variable Force Motion"),
];

/// Subject 9618.
pub(crate) const SUBJECT_9618: &[(&str, &str)] = &[
    ("bitmapped image", "Information representation"),
    ("vector graphic", "Information representation"),
    ("colour depth", "Information representation"),
    ("image resolution", "Information representation"),
    ("file size", "Information representation"),
    ("file header", "Information representation"),
    ("lossless compression", "Information representation"),
    ("binary", "Information representation"),
    ("denary", "Information representation"),
    ("hexadecimal", "Information representation"),
    ("bit manipulation", "Information representation"),
    ("bitwise operation", "Information representation"),
    ("logical shift", "Information representation"),
    ("email", "Internet and Communication"),
    ("internet", "Internet and Communication"),
    ("protocol", "Internet and Communication"),
    ("IP address", "Internet and Communication"),
    ("MAC address", "Internet and Communication"),
    ("embedded system", "Hardware"),
    ("RAM", "Hardware"),
    ("DRAM", "Hardware"),
    ("SRAM", "Hardware"),
    ("ROM", "Hardware"),
    ("EPROM", "Hardware"),
    ("EEPROM", "Hardware"),
    ("monitor", "Hardware"),
    ("screen resolution", "Hardware"),
    ("pixels", "Hardware"),
    ("VGA port", "Hardware"),
    ("HDMI port", "Hardware"),
    ("speakers", "Hardware"),
    ("sensor", "Hardware"),
    ("input device", "Hardware"),
    ("output device", "Hardware"),
    ("storage device", "Hardware"),
    ("logic gate", "Processor Fundamentals"),
    ("logic circuit", "Processor Fundamentals"),
    ("truth table", "Processor Fundamentals"),
    ("Boolean expression", "Processor Fundamentals"),
    ("Von Neumann model", "Processor Fundamentals"),
    ("processor", "Processor Fundamentals"),
    ("CPU", "Processor Fundamentals"),
    ("register", "Processor Fundamentals"),
    ("Program Counter (PC)", "Processor Fundamentals"),
    ("Memory Address Register (MAR)", "Processor Fundamentals"),
    ("Memory Data Register (MDR)", "Processor Fundamentals"),
    ("Accumulator (ACC)", "Processor Fundamentals"),
    ("Index Register (IX)", "Processor Fundamentals"),
    ("instruction set", "Processor Fundamentals"),
    ("assembly language", "Processor Fundamentals"),
    ("opcode", "Processor Fundamentals"),
    ("operand", "Processor Fundamentals"),
    ("addressing mode", "Processor Fundamentals"),
    ("fetch-decode-execute cycle", "Processor Fundamentals"),
    ("Operating System (OS)", "System Software"),
    ("process management", "System Software"),
    ("memory management", "System Software"),
    ("file management", "System Software"),
    ("interrupt", "System Software"),
    ("Integrated Development Environment (IDE)", "System Software"),
    ("debugger", "System Software"),
    ("translator", "System Software"),
    ("compiler", "System Software"),
    ("interpreter", "System Software"),
    ("assembler", "System Software"),
    ("program library", "System Software"),
    ("utility software", "System Software"),
    ("security", "Security, privacy and data integrity"),
    ("privacy", "Security, privacy and data integrity"),
    ("data integrity", "Security, privacy and data integrity"),
    ("unauthorised access", "Security, privacy and data integrity"),
    ("malware", "Security, privacy and data integrity"),
    ("virus", "Security, privacy and data integrity"),
    ("hacking", "Security, privacy and data integrity"),
    ("firewall", "Security, privacy and data integrity"),
    ("encryption", "Security, privacy and data integrity"),
    ("authentication", "Security, privacy and data integrity"),
    ("password", "Security, privacy and data integrity"),
    ("data validation", "Security, privacy and data integrity"),
    ("data verification", "Security, privacy and data integrity"),
    ("ethics", "Ethics and Ownership"),
    ("ethical", "Ethics and Ownership"),
    ("copyright", "Ethics and Ownership"),
    ("plagiarism", "Ethics and Ownership"),
    ("software licence", "Ethics and Ownership"),
    ("freeware", "Ethics and Ownership"),
    ("shareware", "Ethics and Ownership"),
    ("open source", "Ethics and Ownership"),
    ("Data Protection Act", "Ethics and Ownership"),
    ("database", "Databases"),
    ("relational database", "Databases"),
    ("DML", "Databases"),
    ("DDL", "Databases"),
    ("field", "Databases"),
    ("primary key", "Databases"),
    ("foreign key", "Databases"),
    ("relationship", "Databases"),
    ("normalisation", "Databases"),
    ("SQL", "Databases"),
    ("query", "Databases"),
    ("SELECT statement", "Databases"),
    ("FROM clause", "Databases"),
    ("WHERE clause", "Databases"),
    ("data dictionary", "Databases"),
    ("DBMS", "Databases"),
];

/// Subject 9608.
pub(crate) const SUBJECT_9608: &[(&str, &str)] = &[
    ("bitmapped image", "Information representation"),
    ("vector graphic", "Information representation"),
    ("colour depth", "Information representation"),
    ("image resolution", "Information representation"),
    ("file size", "Information representation"),
    ("file header", "Information representation"),
    ("lossless compression", "Information representation"),
    ("binary", "Information representation"),
    ("denary", "Information representation"),
    ("hexadecimal", "Information representation"),
    ("bit manipulation", "Information representation"),
    ("bitwise operation", "Information representation"),
    ("logical shift", "Information representation"),
    ("email", "Internet and Communication"),
    ("internet", "Internet and Communication"),
    ("protocol", "Internet and Communication"),
    ("IP address", "Internet and Communication"),
    ("MAC address", "Internet and Communication"),
    ("embedded system", "Hardware"),
    ("RAM", "Hardware"),
    ("DRAM", "Hardware"),
    ("SRAM", "Hardware"),
    ("ROM", "Hardware"),
    ("EPROM", "Hardware"),
    ("EEPROM", "Hardware"),
    ("monitor", "Hardware"),
    ("screen resolution", "Hardware"),
    ("VGA port", "Hardware"),
    ("HDMI port", "Hardware"),
    ("speakers", "Hardware"),
    ("sensor", "Hardware"),
    ("input device", "Hardware"),
    ("output device", "Hardware"),
    ("storage device", "Hardware"),
    ("logic gate", "Processor Fundamentals"),
    ("logic circuit", "Processor Fundamentals"),
    ("truth table", "Processor Fundamentals"),
    ("Boolean expression", "Processor Fundamentals"),
    ("Von Neumann model", "Processor Fundamentals"),
    ("processor", "Processor Fundamentals"),
    ("CPU", "Processor Fundamentals"),
    ("register", "Processor Fundamentals"),
    ("Program Counter (PC)", "Processor Fundamentals"),
    ("Memory Address Register (MAR)", "Processor Fundamentals"),
    ("Memory Data Register (MDR)", "Processor Fundamentals"),
    ("Accumulator (ACC)", "Processor Fundamentals"),
    ("Index Register (IX)", "Processor Fundamentals"),
    ("instruction set", "Processor Fundamentals"),
    ("assembly language", "Processor Fundamentals"),
    ("opcode", "Processor Fundamentals"),
    ("operand", "Processor Fundamentals"),
    ("addressing mode", "Processor Fundamentals"),
    ("fetch-decode-execute cycle", "Processor Fundamentals"),
    ("Operating System (OS)", "System Software"),
    ("process management", "System Software"),
    ("memory management", "System Software"),
    ("file management", "System Software"),
    ("interrupt", "System Software"),
    ("Integrated Development Environment (IDE)", "System Software"),
    ("debugger", "System Software"),
    ("translator", "System Software"),
    ("compiler", "System Software"),
    ("interpreter", "System Software"),
    ("assembler", "System Software"),
    ("program library", "System Software"),
    ("utility software", "System Software"),
    ("security", "Security, privacy and data integrity"),
    ("privacy", "Security, privacy and data integrity"),
    ("data integrity", "Security, privacy and data integrity"),
    ("unauthorised access", "Security, privacy and data integrity"),
    ("malware", "Security, privacy and data integrity"),
    ("virus", "Security, privacy and data integrity"),
    ("hacking", "Security, privacy and data integrity"),
    ("firewall", "Security, privacy and data integrity"),
    ("encryption", "Security, privacy and data integrity"),
    ("authentication", "Security, privacy and data integrity"),
    ("password", "Security, privacy and data integrity"),
    ("data validation", "Security, privacy and data integrity"),
    ("data verification", "Security, privacy and data integrity"),
    ("ethics", "Ethics and Ownership"),
    ("ethical", "Ethics and Ownership"),
    ("copyright", "Ethics and Ownership"),
    ("plagiarism", "Ethics and Ownership"),
    ("software licence", "Ethics and Ownership"),
    ("freeware", "Ethics and Ownership"),
    ("shareware", "Ethics and Ownership"),
    ("open source", "Ethics and Ownership"),
    ("Data Protection Act", "Ethics and Ownership"),
    ("database", "Databases"),
    ("relational database", "Databases"),
    ("table", "Databases"),
    ("record", "Databases"),
    ("field", "Databases"),
    ("primary key", "Databases"),
    ("foreign key", "Databases"),
    ("relationship", "Databases"),
    ("normalisation", "Databases"),
    ("SQL", "Databases"),
    ("query", "Databases"),
    ("SELECT statement", "Databases"),
    ("FROM clause", "Databases"),
    ("WHERE clause", "Databases"),
    ("data dictionary", "Databases"),
    ("DBMS", "Databases"),
];

/// Subject 9701.
pub(crate) const SUBJECT_9701: &[(&str, &str)] = &[
    ("enthalpy change of reaction", "Chemical Energetics"),
    ("standard enthalpy change", "Chemical Energetics"),
    ("enthalpy change of formation", "Chemical Energetics"),
    ("enthalpy change of combustion", "Chemical Energetics"),
    ("enthalpy change of neutralization", "Chemical Energetics"),
    ("hess's Law", "Chemical Energetics"),
    ("bond enthalpy", "Chemical Energetics"),
    ("enthalpy change of solution", "Chemical Energetics"),
    ("enthalpy change of hydration", "Chemical Energetics"),
    ("exothermic reaction", "Chemical Energetics"),
    ("endothermic reaction", "Chemical Energetics"),
    ("state symbols", "Chemical Energetics"),
    ("calorimetry", "Chemical Energetics"),
    ("specific heat capacity", "Chemical Energetics"),
    ("thermal stability", "Chemical Energetics"),
    ("Group 2", "Chemical Energetics"),
    ("average bond enthalpy", "Chemical Energetics"),
    ("bond energies", "Chemical Energetics"),
    ("activation energy", "Chemical Energetics"),
    ("hydration", "Chemical Energetics"),
    ("Born-Haber", "Chemical Energetics"),
    ("electron affinity", "Chemical Energetics"),
    ("lattice energy", "Chemical Energetics"),
    ("Electrode Potential", "Electrochemistry"),
    ("cell", "Electrochemistry"),
    ("half-cell", "Electrochemistry"),
    ("electrochemical series", "Electrochemistry"),
    ("voltaic cell", "Electrochemistry"),
    ("electrolytic cell", "Electrochemistry"),
    ("Nernst equation", "Electrochemistry"),
    ("electrolytic cell", "Electrochemistry"),
    ("electrode", "Electrochemistry"),
    ("electrolyte", "Electrochemistry"),
    ("overpotential", "Electrochemistry"),
    ("selective discharge", "Electrochemistry"),
    ("electrolysed", "Electrochemistry"),
    ("quantitative electrolysis", "Electrochemistry"),
    ("redox titration", "Electrochemistry"),
    ("balancing redox equations", "Electrochemistry"),
    ("oxidation number", "Electrochemistry"),
    ("Batteries", "Electrochemistry"),
    ("Fuel cells", "Electrochemistry"),
    ("standard electrode potential", "Electrochemistry"),
    ("electroplating", "Electrochemistry"),
    ("cell reaction", "Electrochemistry"),
];
