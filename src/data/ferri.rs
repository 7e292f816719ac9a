//! Ferricyanide Fe K-edge samples, digitized from figure 4a of
//! "X-ray Spectroscopic Study of Solvent Effects on the Ferrous and Ferric
//! Hexacyanide Anions".
//!
//! Rows are kept in digitization order, which is not sorted by energy.
//! Rows marked `baseline padding` are zero points added before the edge;
//! commented-out rows were dropped as outliers.

use crate::domain::Sample;

pub const FERRI_CYANIDE: [Sample; 121] = [
    Sample::new(7.105, 0.0), // baseline padding
    Sample::new(7.106, 0.0), // baseline padding
    Sample::new(7.107, 0.0), // baseline padding
    Sample::new(7.108, 0.0), // baseline padding
    Sample::new(7.109, 0.0), // baseline padding
    Sample::new(7.109558914647689, -0.0003532465836775245),
    Sample::new(7.110776643591469, 0.010844049235102515),
    Sample::new(7.111994372535251, 0.006911542385623637),
    Sample::new(7.113212101479032, 0.004644701884943592),
    Sample::new(7.1144298304228135, 0.020561385691987732),
    Sample::new(7.115647559366595, 0.010521435563578763),
    Sample::new(7.116699234363496, 0.014090693470370397),
    Sample::new(7.1173634501510135, 0.05414572524165129),
    Sample::new(7.117861611991652, 0.09497045360947354),
    Sample::new(7.118747233041674, 0.11409219695839856),
    Sample::new(7.119964961985455, 0.1066895518822546),
    Sample::new(7.121182690929237, 0.10886448831170603),
    Sample::new(7.122400419873018, 0.1367184476184775),
    Sample::new(7.123618148816799, 0.15582765859405345),
    Sample::new(7.124669823813702, 0.17926345784850195),
    Sample::new(7.125334039601218, 0.21416533435318574),
    Sample::new(7.12577685012623, 0.25002985378576836),
    Sample::new(7.126230730914366, 0.2891767062349977),
    Sample::new(7.126496417229373, 0.32481888047707375),
    Sample::new(7.126717822491878, 0.3622186156449554),
    Sample::new(7.126939227754384, 0.4049623636819011),
    Sample::new(7.12716063301689, 0.45114154856324484),
    Sample::new(7.127404178805646, 0.5004499626334837),
    Sample::new(7.127650887526724, 0.5544042766992578),
    Sample::new(7.127824848804407, 0.6095282938637996),
    Sample::new(7.128068394593163, 0.677235380811816),
    Sample::new(7.127990902751287, 0.6335700855879128),
    Sample::new(7.128267659329419, 0.7293701583816735),
    Sample::new(7.128406037618484, 0.7724987547168894),
    Sample::new(7.128489064591924, 0.8132119101497538),
    Sample::new(7.128599767223177, 0.8483255315458198),
    Sample::new(7.128738145512243, 0.8854739230037498),
    Sample::new(7.1288488481434955, 0.9270767028836793),
    Sample::new(7.128931875116936, 0.9724976791773856),
    Sample::new(7.129042577748188, 1.0121918830326493),
    Sample::new(7.1291809560372545, 1.0495947512938681),
    Sample::new(7.129291658668508, 1.0938695376083294),
    Sample::new(7.12940236129976, 1.1369991783079914),
    Sample::new(7.1294853882732, 1.1816567241918314),
    Sample::new(7.129596090904452, 1.2198240672273624),
    Sample::new(7.129706793535705, 1.2559555958365833),
    Sample::new(7.129817496166958, 1.2931050316589592),
    Sample::new(7.129955874456024, 1.332798191149777),
    Sample::new(7.130066577087277, 1.370583818980375),
    Sample::new(7.130304587744471, 1.4234805648498745),
    Sample::new(7.13058, 1.4653810035163437),
    Sample::new(7.130979873795113, 1.4976605181964002),
    Sample::new(7.131671765240443, 1.4380868371156856),
    Sample::new(7.131810143529509, 1.4034727700461853),
    Sample::new(7.132031548792015, 1.3602033585715296),
    Sample::new(7.132186532475769, 1.3125594525549773),
    Sample::new(7.1323359810279605, 1.27316080383787),
    Sample::new(7.132474359317026, 1.2319303398828616),
    Sample::new(7.1326736240532815, 1.1888653453423936),
    Sample::new(7.132806467210785, 1.1403061583255583),
    Sample::new(7.13300573194704, 1.0951035586374647),
    Sample::new(7.133138575104543, 1.048300261563322),
    Sample::new(7.133337839840799, 1.00622772655568),
    // Sample::new(7.1338027908920605, 0.27009669948701487), outlier
    Sample::new(7.133514964050803, 0.9570561242278386),
    Sample::new(7.133664412602994, 0.9184972489615841),
    Sample::new(7.1339134935233135, 0.874972316319194),
    Sample::new(7.134134898785819, 0.8360290105004473),
    Sample::new(7.134356304048325, 0.7955588438619681),
    Sample::new(7.134621990363332, 0.7557740936092554),
    // Sample::new(7.135020519835842, 0.2699119419223337), outlier
    Sample::new(7.134854465888963, 0.7211055803399815),
    Sample::new(7.135297276413974, 0.6810087739908692),
    Sample::new(7.135795438254611, 0.6406045067489188),
    // Sample::new(7.13612754614837, 0.26987016734450253), outlier
    Sample::new(7.136570356673381, 0.6042359770348019),
    Sample::new(7.13767738298591, 0.5851778449748468),
    Sample::new(7.138784409298438, 0.6022862646550218),
    Sample::new(7.139614679032834, 0.6382209885864598),
    Sample::new(7.1401681921890985, 0.67090037052015),
    Sample::new(7.1406110027141105, 0.7056197443379334),
    Sample::new(7.141053813239122, 0.7430111245902487),
    Sample::new(7.141496623764133, 0.7842196568918953),
    Sample::new(7.141884082973518, 0.820849695463236),
    Sample::new(7.142216190867276, 0.8539191475174256),
    Sample::new(7.142548298761035, 0.8880065067847701),
    Sample::new(7.142880406654793, 0.9220938660521146),
    Sample::new(7.143267865864178, 0.9608869574514097),
    Sample::new(7.1437106763891896, 1.0013320593431903),
    Sample::new(7.144153486914201, 1.0352880027511073),
    Sample::new(7.144651648754839, 1.0687074561432264),
    Sample::new(7.145315864542356, 1.1042800607937213),
    Sample::new(7.146256836908005, 1.138729794631096),
    Sample::new(7.14741921453616, 1.1694591171184374),
    Sample::new(7.148636943479941, 1.1913444386753453),
    Sample::new(7.149854672423722, 1.19990442944186),
    Sample::new(7.151072401367504, 1.195971922592381),
    Sample::new(7.152290130311285, 1.1828782508245066),
    Sample::new(7.153507859255066, 1.1567368593243719),
    Sample::new(7.154725588198847, 1.137952160864767),
    Sample::new(7.155943317142628, 1.1129212135971651),
    Sample::new(7.15716104608641, 1.087335044213297),
    Sample::new(7.158378775030191, 1.0610548471840957),
    Sample::new(7.159596503973972, 1.0357462888583608),
    Sample::new(7.160814232917754, 1.0101601194744925),
    Sample::new(7.162031961861534, 0.9880440883172893),
    Sample::new(7.163249690805316, 0.9653728350438197),
    Sample::new(7.164467419749097, 0.9464493310551482),
    Sample::new(7.165685148692878, 0.9294691044734089),
    Sample::new(7.16690287763666, 0.9167918492927342),
    Sample::new(7.168120606580441, 0.9095280097456568),
    Sample::new(7.169338335524222, 0.9071223637159103),
    Sample::new(7.17000255131174, 0.9083465487308109),
    Sample::new(7.111299589603283, 0.026328368995689466),
    Sample::new(7.110259917920657, -0.0008022094313808736),
    Sample::new(7.112558139534884, -0.0008889347753140431),
    Sample::new(7.113816689466485, 0.015667346359342194),
    Sample::new(7.115020519835841, 0.018640786722762703),
    Sample::new(7.116279069767442, 0.006517822574400478),
    Sample::new(7.117154582763338, 0.03365459566889495),
    Sample::new(7.117592339261286, 0.07439279353689687),
    Sample::new(7.1181395348837215, 0.11210799370208813),
    Sample::new(7.121751025991792, 0.12253774875461354),
    Sample::new(7.123009575923393, 0.1496600676251194),
];
