//! Ferrocyanide Fe K-edge samples, digitized from figure 2a of
//! "X-ray Spectroscopic Study of Solvent Effects on the Ferrous and Ferric
//! Hexacyanide Anions".
//!
//! Rows are kept in digitization order, which is not sorted by energy.
//! Rows marked `baseline padding` are zero points added before the edge;
//! commented-out rows were dropped as outliers.

use crate::domain::Sample;

pub const FERRO_CYANIDE: [Sample; 119] = [
    Sample::new(7.095, 0.0), // baseline padding
    Sample::new(7.100, 0.0), // baseline padding
    Sample::new(7.105, 0.0), // baseline padding
    Sample::new(7.106, 0.0), // baseline padding
    Sample::new(7.107, 0.0), // baseline padding
    Sample::new(7.108, 0.0), // baseline padding
    Sample::new(7.109, 0.0), // baseline padding
    Sample::new(7.109769204980843, -0.0005164529015979635),
    Sample::new(7.110969300766284, -0.0005164529015979635),
    Sample::new(7.112169396551724, 0.0007081963452861828),
    Sample::new(7.113314942528736, 0.013553406223717479),
    Sample::new(7.114460488505747, 0.02819476833091228),
    Sample::new(7.115406018518518, 0.030167814339781218),
    Sample::new(7.115769683908046, 0.06384566862910002),
    Sample::new(7.117419815613027, 0.10294939944280901),
    Sample::new(7.118497174329502, 0.09895228037311732),
    Sample::new(7.119697270114942, 0.1132398549201008),
    Sample::new(7.120897365900383, 0.1363721184723603),
    Sample::new(7.122097461685824, 0.14276750898386736),
    Sample::new(7.123297557471264, 0.1639947625965288),
    Sample::new(7.12417035440613, 0.19915580319596282),
    Sample::new(7.1247158524904215, 0.23477948906644253),
    Sample::new(7.125108611111111, 0.27459419680403685),
    Sample::new(7.125414090038314, 0.31171467619848614),
    Sample::new(7.125588649425287, 0.34624071348472096),
    Sample::new(7.125850488505747, 0.3835607653490327),
    Sample::new(7.12602504789272, 0.42008252733389395),
    Sample::new(7.126243247126436, 0.45750236543313716),
    Sample::new(7.126515996168582, 0.5058986893748247),
    Sample::new(7.126734195402299, 0.5560412724278105),
    Sample::new(7.126897844827586, 0.5996977502102607),
    Sample::new(7.127072404214559, 0.6410092514718251),
    Sample::new(7.127170593869732, 0.6812729972666106),
    Sample::new(7.127334243295019, 0.7179444386038688),
    Sample::new(7.127443342911877, 0.7591062605130362),
    Sample::new(7.127661542145594, 0.8178554063288478),
    Sample::new(7.127552442528735, 0.7867969407064761),
    Sample::new(7.1278251915708815, 0.8706173780487805),
    Sample::new(7.1279342911877395, 0.9087856129100085),
    Sample::new(7.127988840996168, 0.9414656048500141),
    Sample::new(7.128097940613027, 0.9783865117746006),
    Sample::new(7.128207040229885, 1.0163052810485),
    Sample::new(7.128343414750958, 1.0547229814970565),
    Sample::new(7.128452514367816, 1.094388009882254),
    Sample::new(7.128561613984674, 1.134427236648444),
    Sample::new(7.128643438697318, 1.175963256938604),
    Sample::new(7.128752538314176, 1.2128841638631904),
    Sample::new(7.128861637931034, 1.2483082772638072),
    Sample::new(7.128992557471264, 1.2948086627417998),
    Sample::new(7.129210756704981, 1.3448015664423887),
    Sample::new(7.129298036398467, 1.388009006167648),
    Sample::new(7.1297126149425285, 1.48),
    Sample::new(7.130770881226053, 1.4042242693439866),
    Sample::new(7.1309345306513405, 1.3675528280067284),
    Sample::new(7.131109090038314, 1.327139402859546),
    Sample::new(7.131305469348659, 1.278044575273339),
    Sample::new(7.131452753831417, 1.2395769817073172),
    Sample::new(7.13158912835249, 1.203903402719372),
    Sample::new(7.131698227969348, 1.172470738716008),
    Sample::new(7.131807327586206, 1.132556244743482),
    Sample::new(7.132003706896551, 1.0882511564339783),
    Sample::new(7.132189176245211, 1.0365119936220915),
    Sample::new(7.132352825670498, 0.9851220826324643),
    Sample::new(7.132549204980843, 0.9457564129520606),
    Sample::new(7.132723764367816, 0.8987570962994114),
    Sample::new(7.132871048850575, 0.8616366169049622),
    Sample::new(7.133116522988505, 0.8238425804247267),
    Sample::new(7.133334722222222, 0.7838033536585366),
    // Sample::new(7.133771120689655, 0.2644160008410428), outlier
    Sample::new(7.1335965613026815, 0.7460841568544996),
    Sample::new(7.13383658045977, 0.7092630361648445),
    Sample::new(7.134262068965517, 0.676408418313709),
    // Sample::new(7.134971216475096, 0.2644160008410428), outlier
    Sample::new(7.134753017241379, 0.6377163057190917),
    Sample::new(7.135625814176245, 0.5975205959935774),
    // Sample::new(7.136116762452107, 0.2644160008410428), outlier
    Sample::new(7.1368259099616855, 0.5840494542778498),
    Sample::new(7.137916906130268, 0.6058512346976919),
    Sample::new(7.138680603448275, 0.6404105340622372),
    Sample::new(7.139226101532567, 0.673938708999159),
    Sample::new(7.139717049808429, 0.7108346693650126),
    Sample::new(7.1401534482758615, 0.7471319123212784),
    Sample::new(7.1405898467432944, 0.7879195358494533),
    Sample::new(7.140971695402299, 0.8242167788057191),
    Sample::new(7.141298994252874, 0.8576451675077096),
    Sample::new(7.141626293103448, 0.8880799691617607),
    Sample::new(7.142008141762452, 0.9252503416736754),
    Sample::new(7.142444540229885, 0.9664121635828428),
    Sample::new(7.142880938697318, 1.0045803984440707),
    Sample::new(7.143317337164751, 1.037135657590412),
    Sample::new(7.143808285440613, 1.0720857863751052),
    Sample::new(7.144408333333333, 1.1043666333753857),
    Sample::new(7.145172030651341, 1.1372337245058874),
    Sample::new(7.146208477011494, 1.1683432171802126),
    Sample::new(7.147408572796935, 1.1966462219970946),
    Sample::new(7.1486086685823755, 1.215696321393073),
    Sample::new(7.149808764367816, 1.221139206934781),
    Sample::new(7.151008860153256, 1.2118863015138772),
    Sample::new(7.152208955938697, 1.1977347991054363),
    Sample::new(7.153324196466581, 1.177792671245678),
    Sample::new(7.154124260323542, 1.1573364930847585),
    Sample::new(7.1552637452107275, 1.141673078025843),
    Sample::new(7.156463840996168, 1.1158193717027296),
    Sample::new(7.157663936781609, 1.0881967275785611),
    Sample::new(7.15886403256705, 1.0643841033335883),
    Sample::new(7.160064128352491, 1.0363532427937916),
    Sample::new(7.1612642241379305, 1.011996329994648),
    Sample::new(7.162464319923371, 0.9845097580090221),
    Sample::new(7.163664415708812, 0.9593364123786222),
    Sample::new(7.164864511494253, 0.9385173751815888),
    Sample::new(7.166064607279694, 0.9227330071106354),
    Sample::new(7.1672647030651335, 0.9087175768407371),
    Sample::new(7.168464798850574, 0.9021861141906874),
    Sample::new(7.169555795019157, 0.9000543173535184),
    Sample::new(7.130055555555556, 1.4804878048780488),
    Sample::new(7.129611111111111, 1.453048780487805),
    Sample::new(7.1305555555555555, 1.4454268292682928),
    Sample::new(7.113722222222222, 0.026219512195121863),
    Sample::new(7.114111111111111, 0.036890243902439),
    Sample::new(7.115055555555555, 0.015548780487804947),
    Sample::new(7.115944444444445, 0.08719512195121948),
    Sample::new(7.116388888888888, 0.11158536585365852),
];
